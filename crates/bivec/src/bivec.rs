// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::cmp::max;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr;
use core::slice;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::cursor::{Cursor, CursorMut};
use crate::error::BiVecError;
use crate::into_iter::IntoIter;
use crate::storage::{RawBuf, Side, capacity_overflow};

/// Capacity floor: a fresh allocation never holds fewer slots than this.
pub const MIN_CAPACITY: usize = 8;

static NEXT_OWNER_ID: AtomicUsize = AtomicUsize::new(1);

fn mint_owner_id() -> usize {
    NEXT_OWNER_ID.fetch_add(1, Ordering::Relaxed)
}

/// A double-ended growable array.
///
/// Elements live in a contiguous occupied range somewhere inside a larger
/// allocation. Free slots on both sides of that range (the *slack*) make
/// [`push_back`](Self::push_back) and [`push_front`](Self::push_front)
/// amortized O(1).
///
/// When one side runs out of slack the buffer doubles, and at least half of
/// the newly created slack is placed on the side that ran out:
///
/// ```text
/// before: [ f f | a b c d e f ]            push_back -> back is full
/// after:  [ f f f f | a b c d e f | b b b b b b ]
/// ```
///
/// # Versions
///
/// The container keeps two counters that [`Cursor`]s snapshot:
///
/// - `structure_version` moves on every push, pop, emplace, clear and
///   whole-container assignment.
/// - `realloc_version` moves only when the buffer itself is replaced.
///
/// # Example
///
/// ```rust
/// use bivec::{BiVec, BiVecError};
///
/// fn example() -> Result<(), BiVecError> {
///     let mut v = BiVec::new();
///     v.push_back(2);
///     v.push_front(1);
///     v.push_back(3);
///
///     assert_eq!(v.as_slice(), &[1, 2, 3]);
///     assert_eq!(v.pop_front()?, 1);
///     assert_eq!(*v.back()?, 3);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct BiVec<T> {
    buf: RawBuf<T>,
    head: usize,
    len: usize,
    structure_version: u64,
    realloc_version: u64,
    owner_id: usize,
}

impl<T> BiVec<T> {
    /// Creates an empty container with [`MIN_CAPACITY`] slots, all of them at the back.
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty container with room for at least `capacity` elements.
    ///
    /// The allocation never drops below [`MIN_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::allocate(max(capacity, MIN_CAPACITY)),
            head: 0,
            len: 0,
            structure_version: 0,
            realloc_version: 0,
            owner_id: mint_owner_id(),
        }
    }

    /// Creates a container holding `len` default-constructed elements.
    ///
    /// ```rust
    /// use bivec::BiVec;
    ///
    /// let v: BiVec<u32> = BiVec::with_len(10);
    /// assert_eq!(v.len(), 10);
    /// assert!(v.iter().all(|x| *x == 0));
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut out = Self::with_capacity(len);
        for _ in 0..len {
            out.append(T::default());
        }

        out
    }

    /// Creates a container holding `len` clones of `elem`.
    pub fn from_elem(elem: T, len: usize) -> Self
    where
        T: Clone,
    {
        let mut out = Self::with_capacity(len);
        for _ in 1..len {
            out.append(elem.clone());
        }
        if len > 0 {
            out.append(elem);
        }

        out
    }

    /// Creates a container from the half-open cursor range `[first, last)` of `source`.
    ///
    /// Both cursors are validated against `source`; the distance between them
    /// sizes the allocation up front.
    ///
    /// # Errors
    ///
    /// - [`BiVecError::InvalidCursor`] or [`BiVecError::ForeignCursor`] if either cursor
    ///   fails validation.
    /// - [`BiVecError::CursorOutOfBounds`] if `last` precedes `first`.
    pub fn from_cursors(
        source: &BiVec<T>,
        first: &Cursor<T>,
        last: &Cursor<T>,
    ) -> Result<Self, BiVecError>
    where
        T: Clone,
    {
        let distance = last.distance(first, source)?;
        let start = first.index();

        let Ok(count) = usize::try_from(distance) else {
            return Err(BiVecError::CursorOutOfBounds {
                index: start,
                delta: distance,
                len: source.len(),
            });
        };

        let mut out = Self::with_capacity(count);
        for item in &source.as_slice()[start..start + count] {
            out.append(item.clone());
        }

        Ok(out)
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total number of slots in the allocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Free slots before the first element.
    #[inline]
    pub fn front_slack(&self) -> usize {
        self.head
    }

    /// Free slots after the last element.
    #[inline]
    pub fn back_slack(&self) -> usize {
        self.buf.capacity() - self.head - self.len
    }

    /// Counter bumped by every structural mutation.
    #[inline]
    pub fn structure_version(&self) -> u64 {
        self.structure_version
    }

    /// Counter bumped every time the buffer is replaced.
    #[inline]
    pub fn realloc_version(&self) -> u64 {
        self.realloc_version
    }

    #[inline]
    pub(crate) fn owner_id(&self) -> usize {
        self.owner_id
    }

    /// Returns the occupied range as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): slots [head, head + len) are initialized
        unsafe { slice::from_raw_parts(self.buf.slot(self.head), self.len) }
    }

    /// Returns the occupied range as a mutable slice.
    ///
    /// Writing through the slice counts as element assignment, not as a
    /// structural mutation, and that includes reordering methods such as
    /// `reverse`, `sort`, `swap` or `rotate_left`. Neither version moves, so
    /// existing cursors stay valid and see whatever element now sits at
    /// their index.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY (PRECONDITIONS ARE MET): slots [head, head + len) are initialized
        // and uniquely borrowed through &mut self
        unsafe { slice::from_raw_parts_mut(self.buf.slot(self.head), self.len) }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BiVecError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, BiVecError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(BiVecError::OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BiVecError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, BiVecError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(BiVecError::OutOfRange { index, len })
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`BiVecError::Empty`] if the container is empty.
    pub fn front(&self) -> Result<&T, BiVecError> {
        self.as_slice().first().ok_or(BiVecError::Empty)
    }

    /// Returns the first element mutably.
    ///
    /// # Errors
    ///
    /// Returns [`BiVecError::Empty`] if the container is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, BiVecError> {
        self.as_mut_slice().first_mut().ok_or(BiVecError::Empty)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`BiVecError::Empty`] if the container is empty.
    pub fn back(&self) -> Result<&T, BiVecError> {
        self.as_slice().last().ok_or(BiVecError::Empty)
    }

    /// Returns the last element mutably.
    ///
    /// # Errors
    ///
    /// Returns [`BiVecError::Empty`] if the container is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, BiVecError> {
        self.as_mut_slice().last_mut().ok_or(BiVecError::Empty)
    }

    /// Appends `value` after the last element.
    pub fn push_back(&mut self, value: T) {
        self.append(value);
        self.bump_structure();
    }

    /// Inserts `value` before the first element.
    pub fn push_front(&mut self, value: T) {
        self.check_front(1);

        // SAFETY (PRECONDITIONS ARE MET): check_front guarantees head >= 1, so
        // slot head - 1 is allocated and uninitialized
        unsafe { self.buf.slot(self.head - 1).write(value) };
        self.head -= 1;
        self.len += 1;
        self.bump_structure();
    }

    /// Constructs an element in the slot after the last element.
    ///
    /// The slot is reserved before `make` runs, so the value is written
    /// straight into the buffer. Returns a reference to the new element.
    ///
    /// ```rust
    /// use bivec::BiVec;
    ///
    /// let mut v: BiVec<String> = BiVec::new();
    /// v.emplace_back(|| "tail".repeat(2)).push('!');
    /// assert_eq!(v[0], "tailtail!");
    /// ```
    pub fn emplace_back<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.check_back(1);

        let slot = self.buf.slot(self.head + self.len);
        // SAFETY (PRECONDITIONS ARE MET): check_back guarantees the slot after the
        // occupied range is allocated and uninitialized
        unsafe { slot.write(make()) };
        self.len += 1;
        self.bump_structure();

        // SAFETY: the slot was initialized above and is borrowed through &mut self
        unsafe { &mut *slot }
    }

    /// Constructs an element in the slot before the first element.
    ///
    /// Returns a reference to the new element.
    pub fn emplace_front<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.check_front(1);

        let slot = self.buf.slot(self.head - 1);
        // SAFETY (PRECONDITIONS ARE MET): check_front guarantees head >= 1
        unsafe { slot.write(make()) };
        self.head -= 1;
        self.len += 1;
        self.bump_structure();

        // SAFETY: the slot was initialized above and is borrowed through &mut self
        unsafe { &mut *slot }
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`BiVecError::Empty`] if the container is empty. Nothing changes
    /// in that case, versions included.
    pub fn pop_back(&mut self) -> Result<T, BiVecError> {
        if self.len == 0 {
            return Err(BiVecError::Empty);
        }

        self.len -= 1;
        // SAFETY (PRECONDITIONS ARE MET): the slot was the last live element and is
        // now outside the occupied range, so it is read exactly once
        let value = unsafe { self.buf.slot(self.head + self.len).read() };
        self.bump_structure();

        Ok(value)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`BiVecError::Empty`] if the container is empty.
    pub fn pop_front(&mut self) -> Result<T, BiVecError> {
        if self.len == 0 {
            return Err(BiVecError::Empty);
        }

        // SAFETY (PRECONDITIONS ARE MET): slot head is live; it leaves the occupied
        // range right after this read
        let value = unsafe { self.buf.slot(self.head).read() };
        self.head += 1;
        self.len -= 1;
        self.bump_structure();

        Ok(value)
    }

    /// Drops every element, keeping the allocation.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // Forget the elements before dropping them so a panicking destructor
        // leaks instead of double-dropping.
        self.len = 0;

        // SAFETY (PRECONDITIONS ARE MET): live covers exactly the initialized range,
        // which no longer belongs to self
        unsafe { ptr::drop_in_place(live) };
        self.bump_structure();
    }

    /// Ensures at least `additional` free slots after the last element.
    pub fn reserve_back(&mut self, additional: usize) {
        self.check_back(additional);
    }

    /// Ensures at least `additional` free slots before the first element.
    pub fn reserve_front(&mut self, additional: usize) {
        self.check_front(additional);
    }

    /// Moves the contents out into a new container.
    ///
    /// `self` is left empty and without an allocation; it stays usable and
    /// allocates again on the next push. Cursors issued by `self` are invalidated.
    ///
    /// ```rust
    /// use bivec::{BiVec, bivec};
    ///
    /// let mut x = bivec![1, 2, 3];
    /// let y = x.take();
    ///
    /// assert_eq!(y, [1, 2, 3]);
    /// assert!(x.is_empty());
    /// assert_eq!(x.capacity(), 0);
    /// ```
    pub fn take(&mut self) -> Self {
        let taken = Self {
            buf: mem::replace(&mut self.buf, RawBuf::unallocated()),
            head: self.head,
            len: self.len,
            structure_version: 0,
            realloc_version: 0,
            owner_id: mint_owner_id(),
        };

        self.head = 0;
        self.len = 0;
        self.bump_structure();
        self.bump_realloc();

        taken
    }

    /// Replaces the contents with those of `other`, adopting its buffer.
    ///
    /// The container keeps its identity: cursors issued before the call belong
    /// to it but are invalidated.
    pub fn assign(&mut self, mut other: BiVec<T>) {
        self.clear();

        mem::swap(&mut self.buf, &mut other.buf);
        self.head = other.head;
        self.len = other.len;
        other.head = 0;
        other.len = 0;

        self.bump_structure();
        self.bump_realloc();
    }

    /// Cursor at the first element.
    pub fn begin(&self) -> Cursor<T> {
        Cursor::new(self, 0)
    }

    /// Past-the-end cursor.
    pub fn end(&self) -> Cursor<T> {
        Cursor::new(self, self.len)
    }

    /// Writable cursor at the first element.
    pub fn begin_mut(&mut self) -> CursorMut<T> {
        CursorMut::new(self, 0)
    }

    /// Writable past-the-end cursor.
    pub fn end_mut(&mut self) -> CursorMut<T> {
        CursorMut::new(self, self.len)
    }

    /// Writes `value` after the last element without touching the versions.
    fn append(&mut self, value: T) {
        self.check_back(1);

        // SAFETY (PRECONDITIONS ARE MET): check_back guarantees the slot after the
        // occupied range is allocated and uninitialized
        unsafe { self.buf.slot(self.head + self.len).write(value) };
        self.len += 1;
    }

    #[inline(always)]
    fn check_back(&mut self, additional: usize) {
        if self.back_slack() >= additional {
            return;
        }

        self.grow(Side::Back, additional);
    }

    #[inline(always)]
    fn check_front(&mut self, additional: usize) {
        if self.front_slack() >= additional {
            return;
        }

        self.grow(Side::Front, additional);
    }

    /// Relocates the occupied range into a larger buffer.
    ///
    /// The capacity doubles until `len + additional` fits. Of the free slots in
    /// the new buffer, `max(additional, free / 2)` go to `side`, the rest to the
    /// opposite side.
    #[cold]
    #[inline(never)]
    fn grow(&mut self, side: Side, additional: usize) {
        let old_capacity = self.buf.capacity();
        let required = self
            .len
            .checked_add(additional)
            .unwrap_or_else(|| capacity_overflow());

        let mut new_capacity = match old_capacity {
            0 => MIN_CAPACITY,
            capacity => capacity.checked_mul(2).unwrap_or_else(|| capacity_overflow()),
        };
        while new_capacity < required {
            new_capacity = new_capacity
                .checked_mul(2)
                .unwrap_or_else(|| capacity_overflow());
        }

        let free = new_capacity - self.len;
        let reserved = max(additional, free / 2);
        let new_head = match side {
            Side::Back => free - reserved,
            Side::Front => reserved,
        };

        let new_buf = RawBuf::allocate(new_capacity);
        // SAFETY (PRECONDITIONS ARE MET): source holds len initialized elements,
        // destination has new_head + len <= new_capacity uninitialized slots and
        // the two allocations are distinct. After the copy the old slots are
        // treated as uninitialized, so every element is moved exactly once.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.slot(self.head), new_buf.slot(new_head), self.len);
        }

        // Releases the old allocation without dropping any element.
        drop(mem::replace(&mut self.buf, new_buf));
        self.head = new_head;
        self.bump_realloc();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            ?side,
            old_capacity,
            new_capacity,
            relocated = self.len,
            front_slack = self.head,
            "bivec buffer reallocated"
        );
    }

    #[inline]
    fn bump_structure(&mut self) {
        self.structure_version = self.structure_version.wrapping_add(1);
    }

    #[inline]
    fn bump_realloc(&mut self) {
        self.realloc_version = self.realloc_version.wrapping_add(1);
    }
}

impl<T> Drop for BiVec<T> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): the occupied range holds initialized
        // elements; drop_in_place drops them in index order. The buffer itself is
        // released afterwards by RawBuf's own Drop.
        unsafe { ptr::drop_in_place(self.as_mut_slice() as *mut [T]) };
    }
}

impl<T> Default for BiVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BiVec<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        for item in self.as_slice() {
            out.append(item.clone());
        }

        out
    }

    /// Copy-assignment: keeps `self`'s identity and invalidates its cursors.
    fn clone_from(&mut self, source: &Self) {
        self.assign(source.clone());
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for BiVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Deref for BiVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

/// Element assignment through slice methods; see [`BiVec::as_mut_slice`] for
/// how reordering interacts with cursors.
impl<T> DerefMut for BiVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for BiVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with [`BiVecError::OutOfRange`]'s message if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for BiVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, U> PartialEq<BiVec<U>> for BiVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &BiVec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for BiVec<T> {}

impl<T, U, const N: usize> PartialEq<[U; N]> for BiVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T, U> PartialEq<Vec<U>> for BiVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for BiVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> FromIterator<T> for BiVec<T> {
    /// Allocates once when the iterator reports an exact length; otherwise
    /// starts from the capacity floor and grows as elements arrive.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();

        let mut out = match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Self::with_capacity(lower),
            _ => Self::new(),
        };
        for item in iter {
            out.append(item);
        }

        out
    }
}

impl<T> Extend<T> for BiVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve_back(iter.size_hint().0);

        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for BiVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve_back(iter.size_hint().0);

        for item in iter {
            self.push_back(*item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for BiVec<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for BiVec<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for BiVec<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

/// Element-wise conversion from a container of another element type.
///
/// ```rust
/// use bivec::{BiVec, bivec};
///
/// let narrow: BiVec<u8> = bivec![1, 2, 3];
/// let wide = BiVec::<u64>::from(&narrow);
/// assert_eq!(wide, [1u64, 2, 3]);
/// ```
impl<T, U> From<&BiVec<U>> for BiVec<T>
where
    T: From<U>,
    U: Clone,
{
    fn from(source: &BiVec<U>) -> Self {
        source.as_slice().iter().cloned().map(T::from).collect()
    }
}

impl<T> IntoIterator for BiVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a BiVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BiVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
