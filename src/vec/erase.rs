// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cursor::Cursor, error::Error, vec::DynamicArray};

// Core imports
use core::ptr;

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Removes and returns the element at `index`, shifting subsequent
    /// elements left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.try_remove(index).ok()
    }

    /// Like [`remove`](DynamicArray::remove) but reports the out-of-range
    /// index.
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }
        // SAFETY: `index < len`; the element is read out once and the hole
        // is closed by moving `[index + 1, len)` down one slot.
        let out = unsafe {
            let at = self.buf.ptr().add(index);
            let out = ptr::read(at);
            ptr::copy(at.add(1), at, len - index - 1);
            out
        };
        self.len = len - 1;
        Ok(out)
    }

    /// Erases the element `position` points at.
    ///
    /// Returns a cursor to the element that now occupies the erased slot,
    /// which is [`end`](DynamicArray::end) when the last element was erased.
    /// Never reallocates.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCursor`] if `position` is not from this buffer or
    ///   lies before `begin`.
    /// - [`Error::OutOfRange`] if `position` is at or past `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut v: DynamicArray<i32> = DynamicArray::try_from(&[10, 20, 30][..]).unwrap();
    /// let c = v.erase(v.begin() + 1).unwrap();
    /// assert_eq!(v.as_slice(), &[10, 30]);
    /// assert_eq!(v[c], 30);
    /// ```
    pub fn erase(&mut self, position: Cursor<T>) -> Result<Cursor<T>, Error> {
        let index = self.live_index(position)?;
        let removed = self.try_remove(index)?;
        drop(removed);
        Ok(self.cursor_at(index))
    }

    /// Erases `[first, last)` with a single shift of the tail.
    ///
    /// Returns a cursor to the slot `first` pointed at, now holding the first
    /// element after the erased range (or `end`). An empty range is a no-op.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCursor`] if either cursor is not from this buffer,
    ///   lies before `begin`, or `first > last`.
    /// - [`Error::OutOfRange`] if either cursor lies past `end`.
    pub fn erase_range(&mut self, first: Cursor<T>, last: Cursor<T>) -> Result<Cursor<T>, Error> {
        let range = self.cursor_range(first, last)?;
        if !range.is_empty() {
            self.drain_slots(range.start, range.end);
        }
        Ok(self.cursor_at(range.start))
    }

    /// Shortens the array to `len` elements, dropping the rest.
    ///
    /// Does nothing if `len >= self.len()`. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        let old = self.len;
        if len >= old {
            return;
        }
        self.len = len;
        // SAFETY: `[len, old)` was live and is now outside the live prefix,
        // so it is dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(len),
                old - len,
            ))
        };
    }

    /// Drops every element. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops `[start, end)` and moves the tail down to `start`.
    fn drain_slots(&mut self, start: usize, end: usize) {
        let tail = self.len - end;
        // While the range is being dropped only `[0, start)` counts as live;
        // the guard closes the gap even if a destructor panics.
        self.len = start;
        let guard = CloseGap {
            array: self,
            start,
            end,
            tail,
        };
        // SAFETY: `[start, end)` holds live elements that are no longer
        // counted by `len`.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                guard.array.buf.ptr().add(start),
                end - start,
            ))
        };
    }
}

struct CloseGap<'a, T, A: Allocator> {
    array: &'a mut DynamicArray<T, A>,
    start: usize,
    end: usize,
    tail: usize,
}

impl<T, A: Allocator> Drop for CloseGap<'_, T, A> {
    fn drop(&mut self) {
        let base = self.array.buf.ptr();
        // SAFETY: `[end, end + tail)` are the live elements after the erased
        // range; moving them to `start` makes `[0, start + tail)` live again.
        unsafe { ptr::copy(base.add(self.end), base.add(self.start), self.tail) };
        self.array.len = self.start + self.tail;
    }
}
