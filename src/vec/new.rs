// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{construct, error::Error, raw::RawBuf, vec::DynamicArray};

// Core imports
use core::iter;

// External imports - allocator-api2
use allocator_api2::alloc::{Allocator, Global};

impl<T> DynamicArray<T> {
    /// Constructs an empty array on the global allocator.
    ///
    /// Nothing is allocated until the first element is pushed.
    #[inline]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Constructs an empty array with room for exactly `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::with_capacity_in(capacity, Global)
    }

    /// Constructs an array holding `count` copies of `value`.
    ///
    /// Capacity is exactly `count`.
    #[inline]
    pub fn from_elem(count: usize, value: T) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::from_elem_in(count, value, Global)
    }

    /// Constructs an array of `count` default values.
    ///
    /// Capacity is exactly `count`.
    #[inline]
    pub fn with_len(count: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        Self::with_len_in(count, Global)
    }
}

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Constructs an empty array that will allocate from `alloc`.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buf: RawBuf::new_in(alloc),
            len: 0,
        }
    }

    /// Constructs an empty array with room for exactly `capacity` elements.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuf::with_capacity_in(capacity, alloc)?,
            len: 0,
        })
    }

    /// Constructs an array holding `count` copies of `value`, allocating from
    /// `alloc`.
    ///
    /// If a `clone` panics, the copies made so far are dropped and the buffer
    /// is released before the panic propagates.
    pub fn from_elem_in(count: usize, value: T, alloc: A) -> Result<Self, Error>
    where
        T: Clone,
    {
        let buf = RawBuf::with_capacity_in(count, alloc)?;
        // SAFETY: the buffer has exactly `count` uninitialized slots.
        unsafe { construct::fill_construct(buf.ptr(), count, value) };
        Ok(Self { buf, len: count })
    }

    /// Constructs an array of `count` default values, allocating from `alloc`.
    pub fn with_len_in(count: usize, alloc: A) -> Result<Self, Error>
    where
        T: Default,
    {
        let buf = RawBuf::with_capacity_in(count, alloc)?;
        // SAFETY: the buffer has exactly `count` uninitialized slots.
        let len =
            unsafe { construct::range_construct(iter::repeat_with(T::default), buf.ptr(), count) };
        Ok(Self { buf, len })
    }
}

impl<T, A: Allocator + Default> Default for DynamicArray<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        testing::{CloneBomb, CountingAlloc},
        vec::DynamicArray,
        Error,
    };
    use std::{
        cell::Cell,
        panic::{catch_unwind, AssertUnwindSafe},
        rc::Rc,
        string::String,
    };

    #[test]
    fn test_default_is_unallocated() {
        let v: DynamicArray<u64> = DynamicArray::default();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert_eq!(v.at(0), Err(Error::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_from_elem_is_tight() {
        let v = DynamicArray::from_elem(4, 'x').unwrap();
        assert_eq!(v.as_slice(), &['x'; 4]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_with_len_default_constructs_each_slot() {
        let v: DynamicArray<String> = DynamicArray::with_len(3).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert!(v.iter().all(String::is_empty));
    }

    #[test]
    fn test_with_capacity_reserves_without_elements() {
        let v: DynamicArray<i32> = DynamicArray::with_capacity(10).unwrap();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn test_zero_count_allocates_nothing() {
        let alloc = CountingAlloc::new();
        let v = DynamicArray::from_elem_in(0, 5u8, alloc.clone()).unwrap();
        assert_eq!(v.capacity(), 0);
        assert_eq!(alloc.allocations(), 0);
    }

    #[test]
    fn test_from_elem_allocation_failure() {
        let alloc = CountingAlloc::new();
        alloc.fail_after(0);
        let err = DynamicArray::from_elem_in(3, 1u32, alloc.clone()).unwrap_err();
        assert!(matches!(err, Error::AllocationFailure { layout } if layout.size() == 12));
    }

    #[test]
    fn test_from_elem_length_error() {
        let err = DynamicArray::from_elem(usize::MAX, 0u64).unwrap_err();
        assert!(matches!(err, Error::LengthError { requested: usize::MAX, .. }));
    }

    #[test]
    fn test_from_elem_unwinds_on_panicking_clone() {
        let alloc = CountingAlloc::new();
        let budget = Rc::new(Cell::new(3));
        let drops = Rc::new(Cell::new(0));
        let seed = CloneBomb::new(&budget, &drops);

        let result = catch_unwind(AssertUnwindSafe(|| {
            DynamicArray::from_elem_in(10, seed, alloc.clone())
        }));
        assert!(result.is_err());
        // three clones plus the seed were dropped, and the block was released
        assert_eq!(drops.get(), 4);
        assert_eq!(alloc.allocations(), 1);
        assert_eq!(alloc.live_blocks(), 0);
    }
}
