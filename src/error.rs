// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`DynamicArray`](crate::DynamicArray).
//!
//! These errors represent bounds, capacity and allocation conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::alloc::Layout;

/// Errors returned by operations on [`DynamicArray`](crate::DynamicArray).
///
/// Every fallible operation leaves the array exactly as it was before the
/// call when it returns one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A checked index or position was outside the live range.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The live length at the time of the call.
        len: usize,
    },
    /// A requested capacity exceeds [`DynamicArray::max_size`](crate::DynamicArray::max_size).
    #[error("requested capacity {requested} exceeds the maximum of {max}")]
    LengthError {
        /// The capacity that was asked for.
        requested: usize,
        /// The largest representable capacity for the element type.
        max: usize,
    },
    /// The allocator could not provide a block for `layout`.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocationFailure {
        /// The layout that was requested from the allocator.
        layout: Layout,
    },
    /// A cursor was not bound to this array's current buffer.
    ///
    /// Cursors are invalidated whenever the array reallocates.
    #[error("cursor does not point into this array's buffer")]
    InvalidCursor,
}

impl Error {
    /// Turns an error raised by an infallible trait impl into a panic.
    ///
    /// Allocation failures go through [`handle_alloc_error`](alloc::alloc::handle_alloc_error),
    /// everything else panics with the error message.
    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        match self {
            Self::AllocationFailure { layout } => alloc::alloc::handle_alloc_error(layout),
            other => panic!("{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::{alloc::Layout, error::Error as CoreError};

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange { index: 3, len: 3 });
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::OutOfRange { index: 5, len: 2 }.to_string(),
            "index 5 out of range for length 2"
        );
        assert_eq!(
            Error::LengthError { requested: 10, max: 4 }.to_string(),
            "requested capacity 10 exceeds the maximum of 4"
        );
        let layout = Layout::array::<u32>(4).unwrap();
        assert_eq!(
            Error::AllocationFailure { layout }.to_string(),
            "memory allocation of 16 bytes failed"
        );
        assert_eq!(
            Error::InvalidCursor.to_string(),
            "cursor does not point into this array's buffer"
        );
    }

    #[test]
    #[should_panic(expected = "exceeds the maximum")]
    fn test_raise_panics_with_message() {
        Error::LengthError { requested: 2, max: 1 }.raise();
    }
}
