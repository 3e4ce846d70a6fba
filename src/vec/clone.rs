// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{construct, error::Error, vec::DynamicArray};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T: Clone, A: Allocator + Clone> DynamicArray<T, A> {
    /// Deep copy with capacity equal to `self.len()`.
    ///
    /// The copy allocates from a clone of this array's allocator. If an
    /// element's `clone` panics, the copies made so far are dropped and the
    /// new block is released.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut copy = Self::with_capacity_in(self.len, self.allocator().clone())?;
        copy.fill_from(self.as_slice());
        Ok(copy)
    }

    /// Clones `src` into the spare capacity. Callers have reserved room.
    fn fill_from(&mut self, src: &[T]) {
        debug_assert!(src.len() <= self.spare_capacity());
        // SAFETY: `src.len()` uninitialized slots follow `len`.
        let dst = unsafe { self.buf.ptr().add(self.len) };
        // SAFETY: as above; a panicking `clone` leaves them uninitialized.
        let written = unsafe { construct::range_construct(src.iter().cloned(), dst, src.len()) };
        self.len += written;
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for DynamicArray<T, A> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|err| err.raise())
    }

    /// Replaces the contents with a deep copy of `source`.
    ///
    /// The result has capacity `source.len()`: the existing block is reused
    /// only when it already has exactly that size. The allocator of `self`
    /// is kept, and a fresh block makes earlier cursors stale like any other
    /// reallocation.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if self.capacity() != source.len() {
            if let Err(err) = self.buf.reallocate(source.len(), 0) {
                err.raise();
            }
        }
        self.fill_from(source.as_slice());
    }
}
