// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random-access cursors into a [`DynamicArray`](crate::DynamicArray).
//!
//! A [`Cursor<T>`] is a position in one particular buffer: the identity of
//! the buffer it was taken from (its address and the array's reallocation
//! epoch) plus a signed element offset. It owns nothing and borrows nothing,
//! so any number of cursors can be held while the array is mutated, and it
//! is `Send` and `Sync` whatever `T` is.
//!
//! - Arithmetic (`+`, `-`, `+=`, `-=`, [`advance`](Cursor::advance), …) only
//!   changes the offset and never fails; offsets wrap around at the ends of
//!   `isize`.
//! - Comparisons order cursors by buffer identity first and offset second.
//!   Within one buffer this is position order; across buffers it is
//!   meaningless but consistent.
//! - Dereferencing goes through the array ([`Cursor::get`], or
//!   `array[cursor]`) and is checked: a cursor into a buffer the array has
//!   since replaced, or outside the live range, resolves to nothing.
//!
//! Whenever the array reallocates (growth in `push`/`insert`, `reserve`, or
//! a `clone_from` that needs a different block), cursors taken before are
//! stale, even if the allocator later returns the same address. Re-derive them from
//! [`begin`](crate::DynamicArray::begin), [`end`](crate::DynamicArray::end)
//! or the cursor returned by the mutating call.

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, Sub, SubAssign},
};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

/// A position within a [`DynamicArray`]'s buffer.
///
/// See the [module documentation](self) for the invalidation rules.
///
/// # Examples
///
/// ```
/// use dynamic_array::DynamicArray;
///
/// let v: DynamicArray<i32> = DynamicArray::try_from(&[10, 20, 30][..]).unwrap();
/// let mut c = v.begin();
/// c.advance();
/// assert_eq!(v[c], 20);
/// assert_eq!(v[c + 1], 30);
/// assert_eq!(v.end() - v.begin(), 3);
/// ```
pub struct Cursor<T> {
    // Address of the block, never dereferenced; 0 when unbound.
    base: usize,
    epoch: usize,
    offset: isize,
    _elem: PhantomData<fn() -> T>,
}

impl<T> Cursor<T> {
    #[inline]
    pub(crate) fn new(base: *const T, epoch: usize, offset: isize) -> Self {
        Self {
            base: base as usize,
            epoch,
            offset,
            _elem: PhantomData,
        }
    }

    /// A cursor bound to no buffer.
    ///
    /// Unbound cursors compare equal to each other and never resolve.
    #[inline]
    pub const fn unbound() -> Self {
        Self {
            base: 0,
            epoch: 0,
            offset: 0,
            _elem: PhantomData,
        }
    }

    /// Returns `true` if the cursor was taken from some array.
    #[inline]
    pub const fn is_bound(&self) -> bool {
        self.base != 0
    }

    /// The signed element offset from the start of the buffer.
    #[inline]
    pub const fn position(&self) -> isize {
        self.offset
    }

    /// Returns `true` if the cursor was taken from the block at `base` while
    /// its owner was at `epoch`.
    #[inline]
    pub(crate) fn is_in(&self, base: *const T, epoch: usize) -> bool {
        self.base == base as usize && self.epoch == epoch
    }

    /// Returns `true` if both cursors were taken from the same buffer.
    #[inline]
    pub const fn same_buffer(&self, other: &Self) -> bool {
        self.base == other.base && self.epoch == other.epoch
    }

    /// Moves one element forward (prefix increment).
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.offset = self.offset.wrapping_add(1);
        self
    }

    /// Moves one element backward (prefix decrement).
    #[inline]
    pub fn retreat(&mut self) -> &mut Self {
        self.offset = self.offset.wrapping_sub(1);
        self
    }

    /// Moves one element forward and returns the position before the move
    /// (postfix increment).
    #[inline]
    pub fn post_advance(&mut self) -> Self {
        let before = *self;
        self.advance();
        before
    }

    /// Moves one element backward and returns the position before the move
    /// (postfix decrement).
    #[inline]
    pub fn post_retreat(&mut self) -> Self {
        let before = *self;
        self.retreat();
        before
    }

    /// Moves by `n` elements; a negative `n` moves backward.
    #[inline]
    pub fn advance_by(&mut self, n: isize) -> &mut Self {
        self.offset = self.offset.wrapping_add(n);
        self
    }

    /// Moves back by `n` elements; a negative `n` moves forward.
    #[inline]
    pub fn retreat_by(&mut self, n: isize) -> &mut Self {
        self.offset = self.offset.wrapping_sub(n);
        self
    }

    /// The cursor `n` elements away, leaving `self` untouched.
    #[inline]
    #[must_use]
    pub fn offset(mut self, n: isize) -> Self {
        self.advance_by(n);
        self
    }

    /// Signed number of elements from `self` to `other` (`other - self`).
    ///
    /// Only meaningful when both cursors come from the same buffer.
    #[inline]
    pub fn distance_to(self, other: Self) -> isize {
        other.offset.wrapping_sub(self.offset)
    }

    /// Resolves the cursor against `array`.
    ///
    /// Returns `None` if the cursor belongs to another buffer or is outside
    /// `[begin, end)`.
    #[inline]
    pub fn get<'a, A: Allocator>(&self, array: &'a DynamicArray<T, A>) -> Option<&'a T> {
        let index = array.live_index(*self).ok()?;
        array.get(index)
    }

    /// Mutable counterpart of [`get`](Cursor::get).
    #[inline]
    pub fn get_mut<'a, A: Allocator>(
        &self,
        array: &'a mut DynamicArray<T, A>,
    ) -> Option<&'a mut T> {
        let index = array.live_index(*self).ok()?;
        array.get_mut(index)
    }

    /// Resolves the element `n` positions away without moving the cursor
    /// (`cursor[n]`).
    #[inline]
    pub fn get_at<'a, A: Allocator>(
        &self,
        n: isize,
        array: &'a DynamicArray<T, A>,
    ) -> Option<&'a T> {
        self.offset(n).get(array)
    }
}

/// Signed number of elements between `first` and `last` (`last - first`).
#[inline]
pub fn distance<T>(first: Cursor<T>, last: Cursor<T>) -> isize {
    first.distance_to(last)
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<T> {}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_buffer(other) && self.offset == other.offset
    }
}
impl<T> Eq for Cursor<T> {}

impl<T> PartialOrd for Cursor<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Ord for Cursor<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.base, self.epoch, self.offset).cmp(&(other.base, other.epoch, other.offset))
    }
}

impl<T> Hash for Cursor<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        self.epoch.hash(state);
        self.offset.hash(state);
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("base", &(self.base as *const T))
            .field("epoch", &self.epoch)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<T> Add<isize> for Cursor<T> {
    type Output = Self;
    fn add(self, n: isize) -> Self {
        self.offset(n)
    }
}
impl<T> Sub<isize> for Cursor<T> {
    type Output = Self;
    fn sub(mut self, n: isize) -> Self {
        self.retreat_by(n);
        self
    }
}
impl<T> AddAssign<isize> for Cursor<T> {
    fn add_assign(&mut self, n: isize) {
        self.advance_by(n);
    }
}
impl<T> SubAssign<isize> for Cursor<T> {
    fn sub_assign(&mut self, n: isize) {
        self.retreat_by(n);
    }
}

/// `a - b` is the signed distance from `b` to `a`.
impl<T> Sub for Cursor<T> {
    type Output = isize;
    fn sub(self, rhs: Self) -> isize {
        rhs.distance_to(self)
    }
}
