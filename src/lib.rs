// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dynamic-array`
//!
//! A `no_std` growable array with explicit allocators, checked random-access
//! cursors, and a LIFO stack adapter.
//!
//! The core type, [`DynamicArray<T, A>`], owns one contiguous block of
//! storage obtained from an [`Allocator`](allocator_api2::alloc::Allocator)
//! (the global allocator by default). The first `len` slots hold live
//! elements, the rest of the block is reserved capacity.
//!
//! ## High-level semantics
//!
//! - Growth doubles the capacity (an empty buffer grows to one slot) and
//!   moves every element into a fresh block.
//! - Capacity never shrinks on its own: `pop`, `erase`, `truncate` and
//!   `clear` keep the block.
//! - Copies are tight: a clone's capacity equals the source's length.
//! - Operations that may allocate or take a checked position return
//!   [`Result<_, Error>`](Error) and leave the array unchanged on error.
//!   Indexing (`v[i]`, `v[a..b]`, `v[cursor]`) panics like slice indexing.
//!
//! ## Cursors
//!
//! A [`Cursor<T>`] is a copyable, `Send + Sync` position in one particular
//! buffer. Cursor arithmetic never fails; resolving a cursor goes through the
//! array and reports stale or foreign cursors instead of reading freed
//! memory. Any reallocation makes every earlier cursor stale, even if the
//! allocator later hands the same address out again.
//!
//! ## Other pieces
//!
//! - [`Stack`] is a LIFO view over any [`BackContainer`].
//! - [`Category`] and [`Traversal`] describe what a cursor or iterator type
//!   supports.
//! - [`construct`] holds the raw "fill uninitialized slots" helpers the
//!   array is built on.
//!
//! ## Example
//!
//! ```rust
//! use dynamic_array::DynamicArray;
//!
//! let mut v = DynamicArray::new();
//! v.push(1).unwrap();
//! v.extend_from_slice(&[2, 3]).unwrap();
//! let c = v.insert_at(v.begin() + 1, 9).unwrap();
//! assert_eq!(v[c], 9);
//! assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod category;
pub mod construct;
mod cursor;
mod error;
mod index;
mod iter;
mod raw;
mod stack;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use category::{Category, Traversal};
pub use cursor::{distance, Cursor};
pub use error::Error;
pub use iter::IntoIter;
pub use stack::{BackContainer, Stack};
pub use vec::DynamicArray;
