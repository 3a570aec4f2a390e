// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Double-ended growable array with generation-checked cursors.
//!
//! `BiVec<T>` stores its elements contiguously, like `Vec<T>`, but keeps free
//! slots on *both* sides of them, so pushing and popping at either end is
//! amortized O(1) and indexing stays a single offset computation.
//!
//! # Core Guarantees
//!
//! - **Split slack**: when one end runs out of room the buffer doubles and at
//!   least half of the new free slots go to that end, without starving the other.
//! - **Capacity floor**: allocations never drop below [`MIN_CAPACITY`] slots.
//! - **Checked access**: indexing, `front`/`back` and `pop_*` return
//!   [`BiVecError`] instead of reading outside the occupied range.
//! - **Checked cursors**: [`Cursor`] and [`CursorMut`] snapshot the container's
//!   version counters and refuse to operate after a structural mutation,
//!   reporting how stale they are through [`Severity`].
//!
//! # Example: Both Ends
//!
//! ```rust
//! use bivec::BiVec;
//!
//! let mut v = BiVec::new();
//! v.push_back(42);
//! for k in 0..10 {
//!     v.push_back(k);
//!     v.push_front(k);
//! }
//!
//! assert_eq!(v.len(), 21);
//! assert_eq!(v[0], 9);
//! assert_eq!(v[10], 42);
//! assert_eq!(v[20], 9);
//! ```
//!
//! # Example: Stale Cursors
//!
//! ```rust
//! use bivec::{BiVec, BiVecError, Severity};
//!
//! fn example() -> Result<(), BiVecError> {
//!     let mut v: BiVec<u32> = BiVec::with_len(8);
//!     let cursor = v.begin();
//!
//!     // Full at the back: this push relocates every element.
//!     v.push_back(1);
//!
//!     assert_eq!(
//!         cursor.get(&v),
//!         Err(BiVecError::InvalidCursor(Severity::Moderate))
//!     );
//!
//!     // A fresh cursor works again.
//!     assert_eq!(*v.begin().get(&v)?, 0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Thread Safety
//!
//! There is no internal synchronization. Mutation requires `&mut BiVec`, so
//! the usual borrow rules apply; `BiVec<T>` is `Send`/`Sync` exactly when `T` is.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod bivec;
mod cursor;
mod error;
mod into_iter;
mod storage;

#[cfg(test)]
mod tests;

pub use bivec::{BiVec, MIN_CAPACITY};
pub use cursor::{Cursor, CursorMut};
pub use error::{BiVecError, Severity};
pub use into_iter::IntoIter;

/// Creates a [`BiVec`] from a list of elements, or from `elem; count`.
///
/// ```rust
/// use bivec::bivec;
///
/// let a = bivec![1, 2, 3];
/// let b = bivec![0u8; 4];
///
/// assert_eq!(a, [1, 2, 3]);
/// assert_eq!(b, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! bivec {
    () => {
        $crate::BiVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::BiVec::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::BiVec::from([$($x),+])
    };
}
