// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cursor::Cursor, error::Error, vec::DynamicArray};

// Core imports
use core::ptr;

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// - Returns [`Error::OutOfRange`] if `index > len`.
    /// - Returns [`Error::LengthError`] / [`Error::AllocationFailure`] if the
    ///   array is full and cannot grow.
    ///
    /// On error the array is unchanged and `value` is dropped. Growth makes
    /// every existing cursor stale.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = self.len;
        if index > len {
            return Err(Error::OutOfRange { index, len });
        }
        self.grow_for_one()?;

        // SAFETY: `len < capacity` after growth, so shifting `[index, len)`
        // right by one stays inside the block; `copy` handles the overlap.
        // Slot `index` is then a bitwise duplicate and is overwritten without
        // being dropped.
        unsafe {
            let at = self.buf.ptr().add(index);
            ptr::copy(at, at.add(1), len - index);
            ptr::write(at, value);
        }
        self.len = len + 1;
        Ok(())
    }

    /// Inserts `value` before the element `position` points at and returns a
    /// cursor to the inserted element.
    ///
    /// `position` may be anything in `[begin, end]`. The returned cursor is
    /// taken from the buffer after any growth, so it stays usable even when
    /// `position` itself became stale.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCursor`] if `position` is not from this buffer or
    ///   lies before `begin`.
    /// - [`Error::OutOfRange`] if `position` lies past `end`.
    /// - Growth errors as for [`insert`](DynamicArray::insert).
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut v: DynamicArray<i32> = DynamicArray::new();
    /// v.insert_at(v.begin(), 10).unwrap();
    /// v.insert_at(v.end(), 20).unwrap();
    /// let c = v.insert_at(v.begin(), 30).unwrap();
    /// assert_eq!(v[c], 30);
    /// assert_eq!(v.as_slice(), &[30, 10, 20]);
    /// ```
    pub fn insert_at(&mut self, position: Cursor<T>, value: T) -> Result<Cursor<T>, Error> {
        let index = self.index_of(position)?;
        self.insert(index, value)?;
        Ok(self.cursor_at(index))
    }

    /// Inserts every item of `iter` at `index`, keeping their order.
    ///
    /// Items are appended and then rotated into place, so a source without
    /// an exact length is handled like any other. If growth fails partway,
    /// or the iterator panics, the appended items are dropped and the
    /// elements are left as before.
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.len;
        if index > len {
            return Err(Error::OutOfRange { index, len });
        }
        self.try_extend_from_iter(iter)?;
        let added = self.len - len;
        self.as_mut_slice()[index..].rotate_right(added);
        Ok(())
    }
}
