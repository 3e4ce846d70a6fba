// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Traversal capability descriptors.
//!
//! Generic algorithms can ask what a sequence supports through
//! [`Traversal::CATEGORY`] instead of relying on a type hierarchy.

/// What a cursor or iterator type can do, from weakest to strongest.
///
/// Every category except [`Output`](Category::Output) includes the ones
/// before it: a random-access sequence is also bidirectional, forward and
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Single pass, read only.
    Input,
    /// Single pass, write only.
    Output,
    /// Multi-pass, forward only.
    Forward,
    /// Multi-pass, forward and backward.
    Bidirectional,
    /// Bidirectional with O(1) jumps and distances.
    RandomAccess,
}

impl Category {
    /// Returns `true` if a sequence of this category can be used where
    /// `required` is expected.
    pub const fn satisfies(self, required: Category) -> bool {
        match (self, required) {
            (Self::Output, Self::Output) => true,
            (Self::Output, _) | (_, Self::Output) => false,
            _ => self.rank() >= required.rank(),
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Self::Input | Self::Output => 0,
            Self::Forward => 1,
            Self::Bidirectional => 2,
            Self::RandomAccess => 3,
        }
    }
}

/// Associates a traversal [`Category`] with a cursor or iterator type.
pub trait Traversal {
    /// The strongest category the type supports.
    const CATEGORY: Category;
}

impl<T> Traversal for crate::cursor::Cursor<T> {
    const CATEGORY: Category = Category::RandomAccess;
}

impl<T> Traversal for core::slice::Iter<'_, T> {
    const CATEGORY: Category = Category::RandomAccess;
}

impl<T> Traversal for core::slice::IterMut<'_, T> {
    const CATEGORY: Category = Category::RandomAccess;
}

impl<T, A: allocator_api2::alloc::Allocator> Traversal for crate::iter::IntoIter<T, A> {
    const CATEGORY: Category = Category::Input;
}
