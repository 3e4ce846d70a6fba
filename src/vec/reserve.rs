// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawBuf, vec::DynamicArray};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> DynamicArray<T, A> {
    /// The largest capacity this array can ever have.
    ///
    /// This is `isize::MAX / size_of::<T>()`, or `isize::MAX` for
    /// zero-sized `T`.
    #[inline]
    pub const fn max_size(&self) -> usize {
        RawBuf::<T, A>::max_capacity()
    }

    /// Ensures the capacity is at least `n`.
    ///
    /// Does nothing when `n <= capacity`. Otherwise the buffer is reallocated
    /// to exactly `n` slots, every element is moved across and all cursors
    /// become stale.
    ///
    /// # Errors
    ///
    /// - [`Error::LengthError`] if `n > max_size()`.
    /// - [`Error::AllocationFailure`] if the allocator refuses the block.
    ///
    /// The array is unchanged on error.
    pub fn reserve(&mut self, n: usize) -> Result<(), Error> {
        if n <= self.capacity() {
            return Ok(());
        }
        self.buf.reallocate(n, self.len)
    }

    /// Ensures there is room for `additional` more elements, growing by the
    /// doubling policy if needed.
    pub(crate) fn reserve_for(&mut self, additional: usize) -> Result<(), Error> {
        let max = self.max_size();
        let needed = self.len.checked_add(additional).ok_or(Error::LengthError {
            requested: usize::MAX,
            max,
        })?;
        self.grow_to(needed)
    }

    /// Ensures the capacity is at least `total`, doubling from the current
    /// capacity. Live elements are kept.
    pub(crate) fn grow_to(&mut self, total: usize) -> Result<(), Error> {
        if total <= self.capacity() {
            return Ok(());
        }
        let mut cap = self.capacity();
        while cap < total {
            cap = next_capacity(cap);
        }
        self.buf.reallocate(cap, self.len)
    }

    /// Grows the buffer if it is full: an empty buffer gets one slot, any
    /// other buffer doubles.
    #[inline]
    pub(crate) fn grow_for_one(&mut self) -> Result<(), Error> {
        if self.len < self.capacity() {
            return Ok(());
        }
        self.buf.reallocate(next_capacity(self.capacity()), self.len)
    }
}

#[inline]
const fn next_capacity(cap: usize) -> usize {
    if cap == 0 {
        1
    } else {
        cap.saturating_mul(2)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::next_capacity;
    use crate::{testing::CountingAlloc, vec::DynamicArray, Error};

    #[test]
    fn test_next_capacity() {
        assert_eq!(next_capacity(0), 1);
        assert_eq!(next_capacity(1), 2);
        assert_eq!(next_capacity(6), 12);
        assert_eq!(next_capacity(usize::MAX / 2 + 1), usize::MAX);
    }

    #[test]
    fn test_reserve_is_exact() {
        let mut v: DynamicArray<u32> = DynamicArray::new();
        v.reserve(10).unwrap();
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.len(), 0);
        v.push(1).unwrap();
        v.reserve(3).unwrap();
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn test_reserve_keeps_elements() {
        let mut v: DynamicArray<i32> = DynamicArray::try_from(&[1, 2, 3][..]).unwrap();
        let before = v.begin();
        v.reserve(100).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.capacity(), 100);
        assert!(!v.owns(before));
    }

    #[test]
    fn test_reserve_beyond_max_size() {
        let mut v: DynamicArray<u64> = DynamicArray::new();
        let max = v.max_size();
        assert_eq!(max, isize::MAX as usize / 8);
        assert_eq!(
            v.reserve(max + 1),
            Err(Error::LengthError {
                requested: max + 1,
                max
            })
        );
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_reserve_allocation_failure_is_strong() {
        let alloc = CountingAlloc::new();
        let mut v = DynamicArray::new_in(alloc.clone());
        v.push(7u16).unwrap();
        alloc.fail_after(0);
        assert!(matches!(
            v.reserve(50),
            Err(Error::AllocationFailure { .. })
        ));
        assert_eq!(v.as_slice(), &[7]);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn test_reserve_for_follows_doubling() {
        let mut v: DynamicArray<u8> = DynamicArray::from_elem(3, 0).unwrap();
        v.reserve_for(4).unwrap();
        assert_eq!(v.capacity(), 12);
        v.reserve_for(9).unwrap();
        assert_eq!(v.capacity(), 12);
        assert!(matches!(
            v.reserve_for(usize::MAX),
            Err(Error::LengthError { .. })
        ));
    }

    #[test]
    fn test_growth_overflow_is_length_error() {
        let mut v: DynamicArray<()> = DynamicArray::new();
        // zero-sized elements never allocate, so the limit is reachable
        let full = isize::MAX as usize / 2 + 1;
        v.reserve(full).unwrap();
        v.len = full;
        let err = v.push(()).unwrap_err();
        assert_eq!(
            err,
            Error::LengthError {
                requested: full * 2,
                max: isize::MAX as usize
            }
        );
        assert_eq!(v.len(), full);
        assert_eq!(v.capacity(), full);
    }
}
