// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`DynamicArray`](crate::DynamicArray).
//!
//! This module provides `Index` and `IndexMut` impls that mirror slice behavior:
//! - panics on out-of-bounds;
//! - supports all standard range forms, including inclusive ranges;
//! - views are restricted to the live prefix `[0..len)`;
//! - a [`Cursor`] indexes the element it points at and panics if it does not
//!   resolve (stale, foreign, or outside `[begin, end)`).

// Crate imports
use crate::{cursor::Cursor, vec::DynamicArray};

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> Index<usize> for DynamicArray<T, A> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}

// Read-only ranges
impl<T, A: Allocator> Index<Range<usize>> for DynamicArray<T, A> {
    type Output = [T];
    fn index(&self, r: Range<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, A: Allocator> Index<RangeFrom<usize>> for DynamicArray<T, A> {
    type Output = [T];
    fn index(&self, r: RangeFrom<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, A: Allocator> Index<RangeTo<usize>> for DynamicArray<T, A> {
    type Output = [T];
    fn index(&self, r: RangeTo<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, A: Allocator> Index<RangeToInclusive<usize>> for DynamicArray<T, A> {
    type Output = [T];
    fn index(&self, r: RangeToInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, A: Allocator> Index<RangeInclusive<usize>> for DynamicArray<T, A> {
    type Output = [T];
    fn index(&self, r: RangeInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, A: Allocator> Index<RangeFull> for DynamicArray<T, A> {
    type Output = [T];
    fn index(&self, _: RangeFull) -> &Self::Output {
        self.as_slice()
    }
}

// Mutable ranges
impl<T, A: Allocator> IndexMut<usize> for DynamicArray<T, A> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
impl<T, A: Allocator> IndexMut<Range<usize>> for DynamicArray<T, A> {
    fn index_mut(&mut self, r: Range<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, A: Allocator> IndexMut<RangeFrom<usize>> for DynamicArray<T, A> {
    fn index_mut(&mut self, r: RangeFrom<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, A: Allocator> IndexMut<RangeTo<usize>> for DynamicArray<T, A> {
    fn index_mut(&mut self, r: RangeTo<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, A: Allocator> IndexMut<RangeToInclusive<usize>> for DynamicArray<T, A> {
    fn index_mut(&mut self, r: RangeToInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, A: Allocator> IndexMut<RangeInclusive<usize>> for DynamicArray<T, A> {
    fn index_mut(&mut self, r: RangeInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, A: Allocator> IndexMut<RangeFull> for DynamicArray<T, A> {
    fn index_mut(&mut self, _: RangeFull) -> &mut Self::Output {
        self.as_mut_slice()
    }
}

// Cursors
impl<T, A: Allocator> Index<Cursor<T>> for DynamicArray<T, A> {
    type Output = T;
    #[track_caller]
    fn index(&self, c: Cursor<T>) -> &Self::Output {
        match self.live_index(c) {
            Ok(i) => &self.as_slice()[i],
            Err(err) => panic!("{err}"),
        }
    }
}
impl<T, A: Allocator> IndexMut<Cursor<T>> for DynamicArray<T, A> {
    #[track_caller]
    fn index_mut(&mut self, c: Cursor<T>) -> &mut Self::Output {
        match self.live_index(c) {
            Ok(i) => &mut self.as_mut_slice()[i],
            Err(err) => panic!("{err}"),
        }
    }
}
