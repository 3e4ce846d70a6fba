// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A LIFO adapter over any container that can grow and shrink at the back.
//!
//! [`Stack`] adds no state of its own: every operation forwards to the
//! container, and failures are the container's failures.

// Crate imports
use crate::{error::Error, vec::DynamicArray};

// Core imports
use core::{convert::Infallible, fmt, marker::PhantomData};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

/// Operations a container must offer to back a [`Stack`].
pub trait BackContainer {
    /// The element type.
    type Item;
    /// What appending can fail with.
    type Error;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends at the back.
    fn push_back(&mut self, value: Self::Item) -> Result<(), Self::Error>;

    /// Removes and returns the last element.
    fn pop_back(&mut self) -> Option<Self::Item>;

    /// The last element.
    fn back(&self) -> Option<&Self::Item>;

    /// The last element, mutably.
    fn back_mut(&mut self) -> Option<&mut Self::Item>;
}

impl<T, A: Allocator> BackContainer for DynamicArray<T, A> {
    type Item = T;
    type Error = Error;

    fn len(&self) -> usize {
        DynamicArray::len(self)
    }
    fn push_back(&mut self, value: T) -> Result<(), Error> {
        self.push(value)
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }
    fn back(&self) -> Option<&T> {
        DynamicArray::back(self)
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        DynamicArray::back_mut(self)
    }
}

impl<T> BackContainer for alloc::vec::Vec<T> {
    type Item = T;
    type Error = Infallible;

    fn len(&self) -> usize {
        alloc::vec::Vec::len(self)
    }
    fn push_back(&mut self, value: T) -> Result<(), Infallible> {
        self.push(value);
        Ok(())
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }
    fn back(&self) -> Option<&T> {
        self.last()
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }
}

/// A last-in, first-out view over a [`BackContainer`], by default a
/// [`DynamicArray`].
///
/// # Examples
///
/// ```
/// use dynamic_array::Stack;
///
/// let mut s: Stack<i32> = Stack::new();
/// s.push(1).unwrap();
/// s.push(2).unwrap();
/// assert_eq!(s.top(), Some(&2));
/// assert_eq!(s.pop(), Some(2));
/// assert_eq!(s.len(), 1);
/// ```
pub struct Stack<T, C = DynamicArray<T>> {
    container: C,
    _item: PhantomData<T>,
}

impl<T, C: BackContainer<Item = T> + Default> Stack<T, C> {
    /// An empty stack over a default-constructed container.
    pub fn new() -> Self {
        Self::from_container(C::default())
    }
}

impl<T, C: BackContainer<Item = T> + Default> Default for Stack<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: BackContainer<Item = T>> Stack<T, C> {
    /// Wraps an existing container; its last element becomes the top.
    pub fn from_container(container: C) -> Self {
        Self {
            container,
            _item: PhantomData,
        }
    }

    /// Unwraps the container.
    pub fn into_inner(self) -> C {
        self.container
    }

    /// Returns `true` if the stack has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Pushes `value` on top.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), C::Error> {
        self.container.push_back(value)
    }

    /// Removes and returns the top element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.container.pop_back()
    }

    /// The top element, or `None` if empty.
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.container.back()
    }

    /// The top element mutably, or `None` if empty.
    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.container.back_mut()
    }
}

impl<T, C: Clone> Clone for Stack<T, C> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            _item: PhantomData,
        }
    }
}

impl<T, C: PartialEq> PartialEq for Stack<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
    }
}
impl<T, C: Eq> Eq for Stack<T, C> {}

impl<T, C: fmt::Debug> fmt::Debug for Stack<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("container", &self.container).finish()
    }
}
