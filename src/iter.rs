// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`DynamicArray`](crate::DynamicArray).
//!
//! - `IntoIter<T, A>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&DynamicArray` and `&mut DynamicArray` iterate as slices.

// Crate imports
use crate::{raw::RawBuf, vec::DynamicArray};

// Core imports
use core::{fmt, iter::FusedIterator, mem::ManuallyDrop, ptr, slice};

// External imports - allocator-api2
use allocator_api2::alloc::{Allocator, Global};

/// Owned iterator returned by `DynamicArray::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not yet yielded are
/// dropped with the iterator, and the buffer is released afterwards.
pub struct IntoIter<T, A: Allocator = Global> {
    buf: RawBuf<T, A>,
    front: usize,
    back: usize, // exclusive
}

impl<T, A: Allocator> IntoIter<T, A> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` holds the elements that have not been read
        // out yet.
        unsafe {
            slice::from_raw_parts(self.buf.ptr().add(self.front), self.back - self.front)
        }
    }

    /// # Safety
    ///
    /// `i` must be in `[front, back)` and must be excluded from that range
    /// by the caller right after, so it is read exactly once.
    #[inline]
    unsafe fn take(&mut self, i: usize) -> T {
        // SAFETY: upheld by the caller.
        unsafe { ptr::read(self.buf.ptr().add(i)) }
    }

    fn drop_range(&mut self, from: usize, to: usize) {
        // SAFETY: `[from, to)` is a still-unread part of `[front, back)` that
        // the caller removes from the range right after.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(from),
                to - from,
            ))
        };
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was the first unread slot and is now excluded.
            Some(unsafe { self.take(i) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            let (from, to) = (self.front, self.back);
            self.front = self.back;
            self.drop_range(from, to);
            return None;
        }
        let (from, i) = (self.front, self.front + n);
        self.front = i + 1;
        self.drop_range(from, i);
        // SAFETY: `i < back` and is now excluded.
        Some(unsafe { self.take(i) })
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: the old `back - 1` was the last unread slot.
            Some(unsafe { self.take(self.back) })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            let (from, to) = (self.front, self.back);
            self.front = self.back;
            self.drop_range(from, to);
            None
        } else {
            let to = self.back;
            self.back -= n + 1;
            let skipped = self.back + 1;
            self.drop_range(skipped, to);
            // SAFETY: `back` is inside the old range and is now excluded.
            Some(unsafe { self.take(self.back) })
        }
    }
}
impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}
impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let (from, to) = (self.front, self.back);
        self.front = self.back;
        self.drop_range(from, to);
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a DynamicArray<T, A> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, A: Allocator> IntoIterator for &'a mut DynamicArray<T, A> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, A: Allocator> IntoIterator for DynamicArray<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;
    fn into_iter(self) -> Self::IntoIter {
        let me = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: `me` is never used or dropped again, so the buffer
            // moves out exactly once.
            buf: unsafe { ptr::read(&me.buf) },
            front: 0,
            back: me.len,
        }
    }
}
