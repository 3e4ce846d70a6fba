// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bulk construction into uninitialized memory.
//!
//! These helpers write values into a run of uninitialized slots. They do not
//! track lengths or capacities; the caller sizes the destination and decides
//! which slots become live afterwards.
//!
//! If producing a value panics (a `Clone` impl or an iterator), every value
//! already written by the same call is dropped before the panic propagates,
//! so the destination is left fully uninitialized again.

// Core imports
use core::{mem, ptr};

/// Drops the written prefix of a destination run unless disarmed.
struct PartialInit<T> {
    start: *mut T,
    written: usize,
}

impl<T> PartialInit<T> {
    #[inline]
    fn finish(self) -> usize {
        let written = self.written;
        mem::forget(self);
        written
    }
}

impl<T> Drop for PartialInit<T> {
    fn drop(&mut self) {
        // SAFETY: exactly `written` slots starting at `start` were initialized
        // by the helper that owns this guard.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.written)) };
    }
}

/// Writes `count` copies of `value` into the slots starting at `dst`.
///
/// The first `count - 1` slots receive clones and the last one receives
/// `value` itself. With `count == 0` nothing is written and `value` is
/// dropped.
///
/// # Safety
///
/// `dst` must be valid for writes of `count` consecutive `T`s, and those
/// slots must not hold live values (they are overwritten without drop).
pub unsafe fn fill_construct<T: Clone>(dst: *mut T, count: usize, value: T) {
    if count == 0 {
        return;
    }
    let mut guard = PartialInit {
        start: dst,
        written: 0,
    };
    while guard.written + 1 < count {
        // SAFETY: `guard.written < count`, within the caller's writable run.
        unsafe { ptr::write(dst.add(guard.written), value.clone()) };
        guard.written += 1;
    }
    // SAFETY: `guard.written == count - 1`, the last slot of the run.
    unsafe { ptr::write(dst.add(guard.written), value) };
    guard.written += 1;
    guard.finish();
}

/// Moves up to `limit` items from `iter` into the slots starting at `dst`,
/// preserving order.
///
/// Returns the number of slots written; `dst.add(n)` is one past the last
/// constructed slot. Items beyond `limit` are left in the iterator.
///
/// # Safety
///
/// `dst` must be valid for writes of `limit` consecutive `T`s, and those
/// slots must not hold live values.
pub unsafe fn range_construct<I>(iter: I, dst: *mut I::Item, limit: usize) -> usize
where
    I: Iterator,
{
    let mut guard = PartialInit {
        start: dst,
        written: 0,
    };
    for item in iter.take(limit) {
        // SAFETY: `take(limit)` bounds `guard.written` below `limit`.
        unsafe { ptr::write(dst.add(guard.written), item) };
        guard.written += 1;
    }
    guard.finish()
}
