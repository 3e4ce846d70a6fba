// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynamicArray};

// Core imports
use core::ptr;

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Appends `value` at the end, growing the buffer if it is full.
    ///
    /// Growth reallocates (empty buffers get one slot, others double) and
    /// makes every existing cursor stale.
    ///
    /// # Errors
    ///
    /// - [`Error::LengthError`] if the doubled capacity exceeds
    ///   [`max_size`](DynamicArray::max_size).
    /// - [`Error::AllocationFailure`] if the allocator refuses the block.
    ///
    /// On error the array is unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut v = DynamicArray::new();
    /// v.push(1).unwrap();
    /// v.push(2).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 2]);
    /// assert_eq!(v.capacity(), 2);
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        self.grow_for_one()?;
        // SAFETY: `len < capacity` after growth, so slot `len` is
        // uninitialized storage inside the block.
        unsafe { ptr::write(self.buf.ptr().add(self.len), value) };
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element, or `None` if empty.
    ///
    /// Capacity is unchanged, so cursors to the remaining elements stay
    /// valid.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` held a live element and is now outside the live
        // prefix, so it is read exactly once.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }
}
