// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw storage owned by a [`DynamicArray`](crate::DynamicArray).
//!
//! `RawBuf<T, A>` pairs a block of uninitialized slots with the allocator it
//! came from. It knows nothing about which slots are live; the array tracks
//! that with its own length and is responsible for dropping elements before
//! the block is released.

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    alloc::Layout,
    mem,
    ptr::{self, NonNull},
};

// External imports - allocator-api2
use allocator_api2::alloc::{Allocator, Global};

// Invariants:
// - `cap == 0` or `T` is zero-sized ⇔ no block is held and `ptr` is dangling.
// - Otherwise `ptr` was returned by `alloc.allocate(Layout::array::<T>(cap))`
//   and is released with exactly that layout.
// - `cap <= max_capacity()`.
// - `epoch` counts the blocks this buffer has moved into.
pub(crate) struct RawBuf<T, A: Allocator = Global> {
    ptr: NonNull<T>,
    cap: usize,
    epoch: usize,
    alloc: A,
}

impl<T, A: Allocator> RawBuf<T, A> {
    /// An empty buffer that holds no block.
    #[inline]
    pub(crate) const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            epoch: 0,
            alloc,
        }
    }

    /// A buffer with room for exactly `cap` elements.
    pub(crate) fn with_capacity_in(cap: usize, alloc: A) -> Result<Self, Error> {
        let mut buf = Self::new_in(alloc);
        if cap > 0 {
            buf.ptr = buf.allocate_block(cap)?;
            buf.cap = cap;
        }
        Ok(buf)
    }

    /// Largest element count whose storage fits in the address space.
    ///
    /// Zero-sized elements are capped at `isize::MAX` so that every length
    /// stays representable as a signed cursor offset.
    #[inline]
    pub(crate) const fn max_capacity() -> usize {
        let size = mem::size_of::<T>();
        if size == 0 {
            isize::MAX as usize
        } else {
            isize::MAX as usize / size
        }
    }

    #[inline]
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    /// Number of reallocations so far, wrapping on overflow.
    ///
    /// Together with the block address this tells apart successive blocks
    /// even when the allocator hands out a previously freed address again.
    #[inline]
    pub(crate) const fn epoch(&self) -> usize {
        self.epoch
    }

    #[inline]
    pub(crate) const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Moves the first `live` elements into a fresh block of `new_cap` slots
    /// and releases the old block.
    ///
    /// The new block is obtained before the old one is released, so the two
    /// never share an address, and the epoch is bumped so that positions
    /// recorded against the old block stay distinguishable from the new one
    /// if its address comes back later. On error nothing is changed.
    pub(crate) fn reallocate(&mut self, new_cap: usize, live: usize) -> Result<(), Error> {
        debug_assert!(live <= self.cap && live <= new_cap);
        let new_ptr = self.allocate_block(new_cap)?;

        // SAFETY: `live <= self.cap`, so the source holds `live` initialized
        // elements; the destination is a distinct block with room for
        // `new_cap >= live` elements.
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), live) };

        self.release_block();
        self.ptr = new_ptr;
        self.cap = new_cap;
        self.epoch = self.epoch.wrapping_add(1);
        Ok(())
    }

    fn layout_for(cap: usize) -> Result<Layout, Error> {
        let max = Self::max_capacity();
        if cap > max {
            return Err(Error::LengthError {
                requested: cap,
                max,
            });
        }
        Layout::array::<T>(cap).map_err(|_| Error::LengthError {
            requested: cap,
            max,
        })
    }

    fn allocate_block(&self, cap: usize) -> Result<NonNull<T>, Error> {
        let layout = Self::layout_for(cap)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        self.alloc
            .allocate(layout)
            .map(|block| block.cast::<T>())
            .map_err(|_| Error::AllocationFailure { layout })
    }

    fn release_block(&mut self) {
        let size = mem::size_of::<T>() * self.cap;
        if size == 0 {
            return;
        }
        // SAFETY: `size` and the alignment are exactly those of the
        // `Layout::array::<T>(cap)` the block was allocated with, which was
        // validated at allocation time.
        let layout = unsafe { Layout::from_size_align_unchecked(size, mem::align_of::<T>()) };
        // SAFETY: the block is currently allocated by `self.alloc` with `layout`.
        unsafe { self.alloc.deallocate(self.ptr.cast::<u8>(), layout) };
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        self.release_block();
    }
}

// SAFETY: `RawBuf` uniquely owns its block; sending it is sending the `T`s it
// may hold together with the allocator.
unsafe impl<T: Send, A: Allocator + Send> Send for RawBuf<T, A> {}
// SAFETY: shared access only hands out shared pointers to `T` and `&A`.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuf<T, A> {}

#[cfg(test)]
mod tests {
    // Imports
    use super::RawBuf;
    use crate::{error::Error, testing::CountingAlloc};
    use allocator_api2::alloc::Global;
    use core::alloc::Layout;

    #[test]
    fn test_empty_buffer_allocates_nothing() {
        let alloc = CountingAlloc::new();
        let buf: RawBuf<u32, _> = RawBuf::with_capacity_in(0, alloc.clone()).unwrap();
        assert_eq!(buf.capacity(), 0);
        drop(buf);
        assert_eq!(alloc.allocations(), 0);
        assert_eq!(alloc.deallocations(), 0);
    }

    #[test]
    fn test_allocation_is_exact_and_released_once() {
        let alloc = CountingAlloc::new();
        let buf: RawBuf<u64, _> = RawBuf::with_capacity_in(5, alloc.clone()).unwrap();
        assert_eq!(buf.capacity(), 5);
        assert_eq!(alloc.live_blocks(), 1);
        assert_eq!(alloc.last_layout(), Some(Layout::array::<u64>(5).unwrap()));
        drop(buf);
        assert_eq!(alloc.live_blocks(), 0);
        assert_eq!(alloc.deallocations(), 1);
    }

    #[test]
    fn test_reallocate_moves_prefix_to_new_block() {
        let alloc = CountingAlloc::new();
        let mut buf: RawBuf<u16, _> = RawBuf::with_capacity_in(2, alloc.clone()).unwrap();
        unsafe {
            buf.ptr().write(7);
            buf.ptr().add(1).write(9);
        }
        let old = buf.ptr();
        buf.reallocate(4, 2).unwrap();
        assert_ne!(old, buf.ptr());
        assert_eq!(buf.capacity(), 4);
        unsafe {
            assert_eq!(buf.ptr().read(), 7);
            assert_eq!(buf.ptr().add(1).read(), 9);
        }
        assert_eq!(alloc.live_blocks(), 1);
        assert_eq!(alloc.allocations(), 2);
        assert_eq!(alloc.deallocations(), 1);
    }

    #[test]
    fn test_reallocate_failure_leaves_buffer_untouched() {
        let alloc = CountingAlloc::new();
        let mut buf: RawBuf<u8, _> = RawBuf::with_capacity_in(3, alloc.clone()).unwrap();
        let old = buf.ptr();
        alloc.fail_after(0);
        let err = buf.reallocate(6, 0).unwrap_err();
        assert_eq!(
            err,
            Error::AllocationFailure {
                layout: Layout::array::<u8>(6).unwrap()
            }
        );
        assert_eq!(buf.ptr(), old);
        assert_eq!(buf.capacity(), 3);
        assert_eq!(buf.epoch(), 0);
    }

    #[test]
    fn test_every_reallocation_bumps_the_epoch() {
        let mut buf: RawBuf<u8, Global> = RawBuf::new_in(Global);
        assert_eq!(buf.epoch(), 0);
        buf.reallocate(1, 0).unwrap();
        buf.reallocate(2, 0).unwrap();
        buf.reallocate(3, 0).unwrap();
        assert_eq!(buf.epoch(), 3);

        let mut zst: RawBuf<(), Global> = RawBuf::with_capacity_in(4, Global).unwrap();
        zst.reallocate(8, 4).unwrap();
        assert_eq!(zst.epoch(), 1);
    }

    #[test]
    fn test_capacity_beyond_max_is_length_error() {
        let max = RawBuf::<u32, Global>::max_capacity();
        let err = RawBuf::<u32, Global>::with_capacity_in(max + 1, Global).err();
        assert_eq!(
            err,
            Some(Error::LengthError {
                requested: max + 1,
                max
            })
        );
    }

    #[test]
    fn test_zero_sized_elements_never_touch_the_allocator() {
        let alloc = CountingAlloc::new();
        let mut buf: RawBuf<(), _> = RawBuf::with_capacity_in(8, alloc.clone()).unwrap();
        buf.reallocate(16, 8).unwrap();
        assert_eq!(buf.capacity(), 16);
        drop(buf);
        assert_eq!(alloc.allocations(), 0);
        assert_eq!(RawBuf::<(), Global>::max_capacity(), isize::MAX as usize);
    }
}
