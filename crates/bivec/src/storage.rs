// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw, uninitialized element storage.
//!
//! [`RawBuf`] owns an allocation of `capacity` slots and nothing else: it never
//! constructs or drops elements. Tracking which slots are live is the job of
//! the owning [`BiVec`](crate::BiVec).

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::marker::PhantomData;
use core::ptr::NonNull;

/// Side of the occupied range a growth request comes from.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Side {
    Front,
    Back,
}

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf uniquely owns its allocation, exactly like Vec<T>.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access to RawBuf never mutates the allocation.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// A buffer with no allocation behind it (the moved-from state).
    pub(crate) const fn unallocated() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates room for `capacity` elements, all uninitialized.
    ///
    /// Zero-sized element types and zero capacities never touch the allocator.
    pub(crate) fn allocate(capacity: usize) -> Self {
        let layout = Self::layout_for(capacity);

        if layout.size() == 0 {
            return Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            };
        }

        // SAFETY (PRECONDITIONS ARE MET): layout has a non-zero size
        let raw = unsafe { alloc(layout) } as *mut T;
        let ptr = NonNull::new(raw).unwrap_or_else(|| handle_alloc_error(layout));

        Self {
            ptr,
            capacity,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pointer to slot `index`. `index == capacity` yields the one-past-the-end pointer.
    #[inline]
    pub(crate) fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity, "slot {index} beyond capacity {}", self.capacity);

        // SAFETY (PRECONDITIONS ARE MET): index <= capacity keeps the offset inside
        // the allocation or one past its end; for dangling buffers the offset is 0
        // bytes (capacity 0 or zero-sized T).
        unsafe { self.ptr.as_ptr().add(index) }
    }

    fn layout_for(capacity: usize) -> Layout {
        Layout::array::<T>(capacity).unwrap_or_else(|_| capacity_overflow())
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let layout = Self::layout_for(self.capacity);

        if layout.size() == 0 {
            return;
        }

        // SAFETY (PRECONDITIONS ARE MET): ptr was returned by alloc() with this exact layout
        unsafe { dealloc(self.ptr.as_ptr() as *mut u8, layout) };
    }
}

#[cold]
#[inline(never)]
pub(crate) fn capacity_overflow() -> ! {
    panic!("bivec: capacity overflow");
}
