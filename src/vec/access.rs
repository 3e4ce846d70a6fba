// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cursor::Cursor, error::Error, vec::DynamicArray};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Checked element access.
    ///
    /// Returns [`Error::OutOfRange`] when `index >= len`, including on an
    /// empty array.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.get(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Checked mutable element access; see [`at`](DynamicArray::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// A cursor at the first element (equal to [`end`](DynamicArray::end)
    /// when the array is empty).
    #[inline]
    pub fn begin(&self) -> Cursor<T> {
        self.cursor_at(0)
    }

    /// A cursor one past the last element. Never resolves to an element.
    #[inline]
    pub fn end(&self) -> Cursor<T> {
        self.cursor_at(self.len)
    }

    /// A cursor at `index` in the current buffer.
    ///
    /// The position is not checked here; resolving it is. An `index` above
    /// `isize::MAX` saturates to `isize::MAX`, which is never a live
    /// position.
    #[inline]
    pub fn cursor_at(&self, index: usize) -> Cursor<T> {
        let offset = isize::try_from(index).unwrap_or(isize::MAX);
        Cursor::new(self.buf.ptr().cast_const(), self.buf.epoch(), offset)
    }

    /// Returns `true` if `cursor` was taken from this array's current buffer.
    ///
    /// A cursor taken before the latest reallocation is not owned, even when
    /// the new block sits at the old address.
    #[inline]
    pub fn owns(&self, cursor: Cursor<T>) -> bool {
        cursor.is_in(self.buf.ptr().cast_const(), self.buf.epoch())
    }

    /// Converts a cursor into an index in `[0, len]`, the positions an
    /// element can be inserted at.
    pub fn index_of(&self, cursor: Cursor<T>) -> Result<usize, Error> {
        if !self.owns(cursor) {
            return Err(Error::InvalidCursor);
        }
        let index = usize::try_from(cursor.position()).map_err(|_| Error::InvalidCursor)?;
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(index)
    }

    /// Converts a cursor into the index of a live element, `[0, len)`.
    pub(crate) fn live_index(&self, cursor: Cursor<T>) -> Result<usize, Error> {
        let index = self.index_of(cursor)?;
        if index == self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(index)
    }
}
