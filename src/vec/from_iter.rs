// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{construct, cursor::Cursor, error::Error, vec::DynamicArray};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Collects `iter` into a new array allocated from `alloc`.
    ///
    /// When the iterator reports an exact length (`size_hint` lower and upper
    /// bounds agree) the buffer is sized to it in one allocation; otherwise
    /// the array grows as items arrive. Items beyond a misreported length
    /// are still appended.
    pub fn from_iter_in<I>(iter: I, alloc: A) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let mut v = match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => {
                let mut v = Self::with_capacity_in(lower, alloc)?;
                // SAFETY: the buffer has exactly `lower` uninitialized slots.
                v.len = unsafe { construct::range_construct(iter.by_ref(), v.buf.ptr(), lower) };
                v
            }
            _ => Self::new_in(alloc),
        };
        for item in iter {
            v.push(item)?;
        }
        Ok(v)
    }

    /// Copies `[first, last)` of `source` into a new array with capacity
    /// exactly `last - first`.
    ///
    /// # Errors
    ///
    /// Cursor errors as for [`cursor_slice`](DynamicArray::cursor_slice),
    /// plus allocation errors.
    pub fn from_cursors<B: Allocator>(
        first: Cursor<T>,
        last: Cursor<T>,
        source: &DynamicArray<T, B>,
        alloc: A,
    ) -> Result<Self, Error>
    where
        T: Clone,
    {
        let items = source.cursor_slice(first, last)?;
        Self::from_iter_in(items.iter().cloned(), alloc)
    }
}

impl<T, A: Allocator + Default> FromIterator<T> for DynamicArray<T, A> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_in(iter, A::default()).unwrap_or_else(|err| err.raise())
    }
}
