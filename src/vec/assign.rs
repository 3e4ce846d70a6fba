// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{construct, error::Error, vec::DynamicArray};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Replaces the contents with `count` copies of `value`.
    ///
    /// The array first grows through the usual doubling policy, so capacity
    /// ends up where `count` pushes onto an empty array with the old
    /// capacity would leave it. Only then are the old elements dropped.
    ///
    /// On error the array is unchanged.
    pub fn assign(&mut self, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.grow_to(count)?;
        self.clear();
        // SAFETY: `len == 0` and the buffer has room for `count` elements.
        unsafe { construct::fill_construct(self.buf.ptr(), count, value) };
        self.len = count;
        Ok(())
    }

    /// Replaces the contents with the items of `iter`, appending one by one.
    ///
    /// The length of `iter` is not known up front, so the old elements are
    /// dropped before the first item is taken. On error the items assigned
    /// so far are kept.
    pub fn assign_iter<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        for item in iter {
            self.push(item)?;
        }
        Ok(())
    }

    /// Replaces the contents with clones of `items`.
    ///
    /// Grows like [`assign`](DynamicArray::assign). On error the array is
    /// unchanged.
    pub fn assign_from_slice(&mut self, items: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.grow_to(items.len())?;
        self.clear();
        // SAFETY: `len == 0` and the buffer has room for `items.len()`
        // elements. A panicking `clone` drops what was written.
        let dst = self.buf.ptr();
        self.len = unsafe { construct::range_construct(items.iter().cloned(), dst, items.len()) };
        Ok(())
    }
}
