// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{construct, error::Error, vec::DynamicArray};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> Extend<T> for DynamicArray<T, A> {
    /// Appends every item, panicking if the array cannot grow.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(err) = self.try_extend_from_iter(iter) {
            err.raise();
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for DynamicArray<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Appends clones of `src`, growing once up front.
    ///
    /// On error the array is unchanged.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.reserve_for(src.len())?;
        // SAFETY: the buffer has room for `src.len()` elements past `len`. A
        // panicking `clone` drops what was written and `len` is untouched.
        let dst = unsafe { self.buf.ptr().add(self.len) };
        let written = unsafe { construct::range_construct(src.iter().cloned(), dst, src.len()) };
        self.len += written;
        Ok(())
    }

    /// Appends every item of `iter`, all or nothing.
    ///
    /// Growth is sized from the iterator's lower size hint first. If growing
    /// fails partway, the items appended by this call are dropped again and
    /// the error is returned; the capacity gained so far is kept. A panic
    /// from the iterator unwinds through the same rollback.
    pub fn try_extend_from_iter<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        self.reserve_for(iter.size_hint().0)?;
        let mut appended = Rollback {
            start: self.len,
            array: self,
            armed: true,
        };
        for item in iter {
            appended.array.push(item)?;
        }
        appended.armed = false;
        Ok(())
    }
}

// Truncates `array` back to `start` when dropped while armed.
struct Rollback<'a, T, A: Allocator> {
    array: &'a mut DynamicArray<T, A>,
    start: usize,
    armed: bool,
}

impl<T, A: Allocator> Drop for Rollback<'_, T, A> {
    fn drop(&mut self) {
        if self.armed {
            self.array.truncate(self.start);
        }
    }
}
