// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Generation-checked positions into a [`BiVec`].
//!
//! A cursor is a plain value: it stores the identity of the container that
//! issued it, a snapshot of the container's two version counters and a logical
//! index. It never borrows the container, so the container can be mutated
//! while cursors exist. Every operation takes the container as an argument and
//! first checks the snapshot against the live counters; a mismatch fails with
//! [`BiVecError::InvalidCursor`] instead of touching memory.
//!
//! ```rust
//! use bivec::{BiVec, BiVecError, Severity, bivec};
//!
//! let mut v = bivec![1, 2, 3];
//! let mut cursor = v.begin();
//! cursor.advance(&v).unwrap();
//! assert_eq!(cursor.get(&v), Ok(&2));
//!
//! v.pop_back().unwrap();
//! assert_eq!(
//!     cursor.get(&v),
//!     Err(BiVecError::InvalidCursor(Severity::Mild))
//! );
//! ```

use core::cmp::Ordering;
use core::marker::PhantomData;

use crate::BiVec;
use crate::error::{BiVecError, Severity};

/// Validity-tracking state shared by [`Cursor`] and [`CursorMut`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Position {
    owner_id: usize,
    structure_version: u64,
    realloc_version: u64,
    index: usize,
    /// Whether `index` referred to a live element when the position was set.
    dereferenceable: bool,
}

impl Position {
    fn new<T>(vec: &BiVec<T>, index: usize) -> Self {
        Self {
            owner_id: vec.owner_id(),
            structure_version: vec.structure_version(),
            realloc_version: vec.realloc_version(),
            index,
            dereferenceable: index < vec.len(),
        }
    }

    fn validate<T>(&self, vec: &BiVec<T>) -> Result<(), BiVecError> {
        if self.owner_id != vec.owner_id() {
            return Err(BiVecError::ForeignCursor);
        }

        let same_structure = self.structure_version == vec.structure_version();
        let same_buffer = self.realloc_version == vec.realloc_version();
        if same_structure && same_buffer {
            return Ok(());
        }

        let severity = if self.dereferenceable && self.index >= vec.len() {
            Severity::Severe
        } else if self.dereferenceable && !same_buffer {
            Severity::Moderate
        } else {
            Severity::Mild
        };

        Err(BiVecError::InvalidCursor(severity))
    }

    fn moved<T>(&self, vec: &BiVec<T>, delta: isize) -> Result<Self, BiVecError> {
        self.validate(vec)?;

        let len = vec.len();
        let index = self
            .index
            .checked_add_signed(delta)
            .filter(|index| *index <= len)
            .ok_or(BiVecError::CursorOutOfBounds {
                index: self.index,
                delta,
                len,
            })?;

        Ok(Self {
            index,
            dereferenceable: index < len,
            ..*self
        })
    }

    fn distance<T>(&self, other: &Self, vec: &BiVec<T>) -> Result<isize, BiVecError> {
        self.validate(vec)?;
        other.validate(vec)?;

        Ok(self.index.wrapping_sub(other.index) as isize)
    }

    fn compare<T>(&self, other: &Self, vec: &BiVec<T>) -> Result<Ordering, BiVecError> {
        self.validate(vec)?;
        other.validate(vec)?;

        Ok(self.index.cmp(&other.index))
    }
}

/// Read-only cursor into a [`BiVec`].
///
/// Issued by [`BiVec::begin`] and [`BiVec::end`]. Positions range over
/// `0..=len()`, where `len()` is the past-the-end position.
pub struct Cursor<T> {
    pos: Position,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> core::fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.pos.index)
            .field("structure_version", &self.pos.structure_version)
            .field("realloc_version", &self.pos.realloc_version)
            .finish()
    }
}

impl<T> Cursor<T> {
    pub(crate) fn new(vec: &BiVec<T>, index: usize) -> Self {
        Self::from_position(Position::new(vec, index))
    }

    fn from_position(pos: Position) -> Self {
        Self {
            pos,
            _marker: PhantomData,
        }
    }

    /// Logical index of the cursor. Does not validate.
    pub fn index(&self) -> usize {
        self.pos.index
    }

    /// Checks the cursor against `vec` without moving or dereferencing it.
    ///
    /// # Errors
    ///
    /// - [`BiVecError::ForeignCursor`] if another container issued the cursor.
    /// - [`BiVecError::InvalidCursor`] if `vec` changed structurally since then.
    pub fn check(&self, vec: &BiVec<T>) -> Result<(), BiVecError> {
        self.pos.validate(vec)
    }

    /// Returns `true` if the cursor is the past-the-end position of `vec`.
    ///
    /// # Errors
    ///
    /// Fails like [`check`](Self::check).
    pub fn is_end(&self, vec: &BiVec<T>) -> Result<bool, BiVecError> {
        self.pos.validate(vec)?;
        Ok(self.pos.index == vec.len())
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Fails like [`check`](Self::check), and with [`BiVecError::OutOfRange`]
    /// at the past-the-end position.
    pub fn get<'a>(&self, vec: &'a BiVec<T>) -> Result<&'a T, BiVecError> {
        self.pos.validate(vec)?;
        vec.at(self.pos.index)
    }

    /// Returns the element `offset` positions away from the cursor.
    ///
    /// # Errors
    ///
    /// Fails like [`get`](Self::get), and with [`BiVecError::CursorOutOfBounds`]
    /// if the target position is outside `0..=len()`.
    pub fn get_at<'a>(&self, vec: &'a BiVec<T>, offset: isize) -> Result<&'a T, BiVecError> {
        let target = self.pos.moved(vec, offset)?;
        vec.at(target.index)
    }

    /// Moves one position forward.
    ///
    /// # Errors
    ///
    /// Fails like [`check`](Self::check), and with [`BiVecError::CursorOutOfBounds`]
    /// when already past the end. The cursor is unchanged on error.
    pub fn advance(&mut self, vec: &BiVec<T>) -> Result<(), BiVecError> {
        self.pos = self.pos.moved(vec, 1)?;
        Ok(())
    }

    /// Moves one position backward.
    ///
    /// # Errors
    ///
    /// Fails like [`check`](Self::check), and with [`BiVecError::CursorOutOfBounds`]
    /// at position 0. The cursor is unchanged on error.
    pub fn retreat(&mut self, vec: &BiVec<T>) -> Result<(), BiVecError> {
        self.pos = self.pos.moved(vec, -1)?;
        Ok(())
    }

    /// Returns a cursor `delta` positions away.
    ///
    /// # Errors
    ///
    /// Fails like [`check`](Self::check), and with [`BiVecError::CursorOutOfBounds`]
    /// if the target position is outside `0..=len()`.
    pub fn offset(&self, vec: &BiVec<T>, delta: isize) -> Result<Self, BiVecError> {
        self.pos.moved(vec, delta).map(Self::from_position)
    }

    /// Returns `self.index() - other.index()` after validating both cursors.
    ///
    /// # Errors
    ///
    /// Fails if either cursor fails [`check`](Self::check).
    pub fn distance(&self, other: &Self, vec: &BiVec<T>) -> Result<isize, BiVecError> {
        self.pos.distance(&other.pos, vec)
    }

    /// Orders two cursors of `vec` by position after validating both.
    ///
    /// # Errors
    ///
    /// Fails if either cursor fails [`check`](Self::check).
    pub fn compare(&self, other: &Self, vec: &BiVec<T>) -> Result<Ordering, BiVecError> {
        self.pos.compare(&other.pos, vec)
    }
}

/// Writable cursor into a [`BiVec`].
///
/// Issued by [`BiVec::begin_mut`] and [`BiVec::end_mut`]. Wraps a [`Cursor`]
/// for all positioning and validation and adds writable access.
pub struct CursorMut<T> {
    inner: Cursor<T>,
}

impl<T> Clone for CursorMut<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CursorMut<T> {}

impl<T> core::fmt::Debug for CursorMut<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CursorMut").field(&self.inner).finish()
    }
}

impl<T> From<CursorMut<T>> for Cursor<T> {
    fn from(cursor: CursorMut<T>) -> Self {
        cursor.inner
    }
}

impl<T> CursorMut<T> {
    pub(crate) fn new(vec: &BiVec<T>, index: usize) -> Self {
        Self {
            inner: Cursor::new(vec, index),
        }
    }

    /// The read-only view of this cursor.
    pub fn as_cursor(&self) -> Cursor<T> {
        self.inner
    }

    /// Logical index of the cursor. Does not validate.
    pub fn index(&self) -> usize {
        self.inner.index()
    }

    /// See [`Cursor::check`].
    pub fn check(&self, vec: &BiVec<T>) -> Result<(), BiVecError> {
        self.inner.check(vec)
    }

    /// See [`Cursor::is_end`].
    pub fn is_end(&self, vec: &BiVec<T>) -> Result<bool, BiVecError> {
        self.inner.is_end(vec)
    }

    /// See [`Cursor::get`].
    pub fn get<'a>(&self, vec: &'a BiVec<T>) -> Result<&'a T, BiVecError> {
        self.inner.get(vec)
    }

    /// Returns the element under the cursor for writing.
    ///
    /// Writing through the reference is not a structural mutation; other
    /// cursors stay valid.
    ///
    /// # Errors
    ///
    /// Fails like [`Cursor::get`].
    pub fn get_mut<'a>(&self, vec: &'a mut BiVec<T>) -> Result<&'a mut T, BiVecError> {
        self.inner.check(vec)?;
        vec.at_mut(self.inner.index())
    }

    /// See [`Cursor::get_at`].
    pub fn get_at<'a>(&self, vec: &'a BiVec<T>, offset: isize) -> Result<&'a T, BiVecError> {
        self.inner.get_at(vec, offset)
    }

    /// Writable access `offset` positions away from the cursor.
    ///
    /// # Errors
    ///
    /// Fails like [`Cursor::get_at`].
    pub fn get_at_mut<'a>(
        &self,
        vec: &'a mut BiVec<T>,
        offset: isize,
    ) -> Result<&'a mut T, BiVecError> {
        let target = self.inner.offset(vec, offset)?;
        vec.at_mut(target.index())
    }

    /// See [`Cursor::advance`].
    pub fn advance(&mut self, vec: &BiVec<T>) -> Result<(), BiVecError> {
        self.inner.advance(vec)
    }

    /// See [`Cursor::retreat`].
    pub fn retreat(&mut self, vec: &BiVec<T>) -> Result<(), BiVecError> {
        self.inner.retreat(vec)
    }

    /// See [`Cursor::offset`]. The result is again writable.
    pub fn offset(&self, vec: &BiVec<T>, delta: isize) -> Result<Self, BiVecError> {
        self.inner.offset(vec, delta).map(|inner| Self { inner })
    }

    /// See [`Cursor::distance`].
    pub fn distance(&self, other: &Self, vec: &BiVec<T>) -> Result<isize, BiVecError> {
        self.inner.distance(&other.inner, vec)
    }

    /// See [`Cursor::compare`].
    pub fn compare(&self, other: &Self, vec: &BiVec<T>) -> Result<Ordering, BiVecError> {
        self.inner.compare(&other.inner, vec)
    }
}
