// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cursor::Cursor, error::Error, vec::DynamicArray};

// Core imports
use core::{ops::Range, slice};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized and the pointer is non-null and
        // aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Raw pointer to the start of the buffer.
    ///
    /// Dangling (but aligned) while nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr().cast_const()
    }

    /// Mutable raw pointer to the start of the buffer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// The elements in `[first, last)`.
    ///
    /// # Errors
    ///
    /// Same as [`erase_range`](DynamicArray::erase_range).
    pub fn cursor_slice(&self, first: Cursor<T>, last: Cursor<T>) -> Result<&[T], Error> {
        let range = self.cursor_range(first, last)?;
        Ok(&self.as_slice()[range])
    }

    pub(crate) fn cursor_range(
        &self,
        first: Cursor<T>,
        last: Cursor<T>,
    ) -> Result<Range<usize>, Error> {
        let start = self.index_of(first)?;
        let end = self.index_of(last)?;
        if start > end {
            return Err(Error::InvalidCursor);
        }
        Ok(start..end)
    }
}
