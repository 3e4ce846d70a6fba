// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{construct, error::Error, vec::DynamicArray};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator + Default, const N: usize> From<[T; N]> for DynamicArray<T, A> {
    /// Moves the elements of `array` into a buffer of capacity exactly `N`.
    fn from(array: [T; N]) -> Self {
        let mut v = Self::with_capacity_in(N, A::default()).unwrap_or_else(|err| err.raise());
        // SAFETY: the buffer has exactly `N` uninitialized slots.
        v.len = unsafe { construct::range_construct(array.into_iter(), v.buf.ptr(), N) };
        v
    }
}

impl<T: Clone, A: Allocator + Default> TryFrom<&[T]> for DynamicArray<T, A> {
    type Error = Error;

    /// Clones `src` into a buffer of capacity exactly `src.len()`.
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::with_capacity_in(src.len(), A::default())?;
        v.extend_from_slice(src)?;
        Ok(v)
    }
}
