// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynamicArray` type and its inherent API.
//!
//! `DynamicArray<T, A>` is a growable, contiguous array. It owns one block of
//! storage obtained from the allocator `A` and tracks how many slots of that
//! block hold live elements. Methods generally mirror slice/vector semantics,
//! with fallible variants wherever capacity or allocation can fail.

mod access;
mod assign;
mod clone;
mod erase;
mod extend;
mod from;
mod from_iter;
mod insert;
mod new;
mod push;
mod reserve;
mod slice;

// Crate imports
use crate::raw::RawBuf;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
    ptr,
};

// External imports - allocator-api2
use allocator_api2::alloc::{Allocator, Global};

// Invariants:
// - `0 <= len <= buf.capacity()` always holds.
// - Slots `[0, len)` of `buf` hold initialized `T` values.
// - Slots `[len, capacity)` are uninitialized and must never be read as `T`.
// - All public methods maintain these invariants.

/// A growable, contiguous array with an explicit allocator.
///
/// `DynamicArray<T, A>` keeps its elements in one block of memory obtained
/// from `A` (the global allocator by default):
///
/// - the first [`len`](DynamicArray::len) slots hold live elements;
/// - the remaining `capacity - len` slots are reserved but uninitialized;
/// - `0 <= len <= capacity` always holds.
///
/// # Growth
///
/// Appending to a full array reallocates. An empty buffer grows to one slot,
/// any other buffer doubles:
///
/// ```
/// use dynamic_array::DynamicArray;
///
/// let mut v = DynamicArray::new();
/// let mut seen = Vec::new();
/// for i in 0..5 {
///     v.push(i).unwrap();
///     if seen.last() != Some(&v.capacity()) {
///         seen.push(v.capacity());
///     }
/// }
/// assert_eq!(seen, [1, 2, 4, 8]);
/// ```
///
/// Reallocation moves every element into a new block and releases the old
/// one, so every [`Cursor`](crate::Cursor) taken before it becomes stale.
/// `pop`, `truncate` and the erase family never reallocate.
///
/// # Fallible vs panicking operations
///
/// - Operations that may allocate or take a checked position return
///   `Result<_, Error>` and leave the array unchanged on error:
///   [`push`](DynamicArray::push), [`insert`](DynamicArray::insert),
///   [`insert_at`](DynamicArray::insert_at), [`reserve`](DynamicArray::reserve),
///   [`at`](DynamicArray::at), [`erase`](DynamicArray::erase), …
/// - Indexing (`v[i]`, `v[a..b]`, `v[cursor]`) panics on out-of-range
///   positions, exactly like slices.
/// - Trait impls that cannot report errors (`Clone`, `Extend`,
///   `FromIterator`, `From<[T; N]>`) panic on capacity overflow and call
///   [`handle_alloc_error`](alloc::alloc::handle_alloc_error) when the
///   allocator fails.
///
/// # Complexity characteristics
///
/// - `push` is amortized O(1); `pop`, `len`, `capacity` and indexing are O(1).
/// - `insert`/`erase` are O(len - position).
/// - `erase_range` shifts the tail once, O(len - first).
/// - Copies ([`Clone`], [`try_clone`](DynamicArray::try_clone)) are tight:
///   the copy's capacity equals the source's length.
pub struct DynamicArray<T, A: Allocator = Global> {
    pub(crate) buf: RawBuf<T, A>,
    pub(crate) len: usize,
}

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Returns the number of elements the array can hold without
    /// reallocating.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of elements that can be pushed
    /// without reallocating.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Returns a reference to the allocator backing this array.
    #[inline]
    pub const fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns `true` if the array contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T, A: Allocator> Drop for DynamicArray<T, A> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is the initialized prefix; the block itself is
        // released afterwards by `RawBuf`'s own drop.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for DynamicArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T, U, A, B> PartialEq<DynamicArray<U, B>> for DynamicArray<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &DynamicArray<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, A: Allocator> Eq for DynamicArray<T, A> {}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for DynamicArray<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for DynamicArray<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Ord, A: Allocator> Ord for DynamicArray<T, A> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, A: Allocator> PartialOrd for DynamicArray<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, A: Allocator> Hash for DynamicArray<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, A: Allocator> Deref for DynamicArray<T, A> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, A: Allocator> DerefMut for DynamicArray<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> AsRef<[T]> for DynamicArray<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: Allocator> AsMut<[T]> for DynamicArray<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, A: Allocator> Borrow<[T]> for DynamicArray<T, A> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: Allocator> BorrowMut<[T]> for DynamicArray<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
