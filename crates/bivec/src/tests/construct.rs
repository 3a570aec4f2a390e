// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{BiVec, BiVecError, MIN_CAPACITY, bivec};

// =============================================================================
// new(), with_capacity()
// =============================================================================

#[test]
fn test_new() {
    let vec: BiVec<u8> = BiVec::new();

    assert_eq!(vec.len(), 0);
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), MIN_CAPACITY);
    assert_eq!(vec.front_slack(), 0);
    assert_eq!(vec.back_slack(), MIN_CAPACITY);
}

#[test]
fn test_default_matches_new() {
    let vec: BiVec<u8> = BiVec::default();

    assert_eq!(vec.capacity(), MIN_CAPACITY);
    assert!(vec.is_empty());
}

#[test]
fn test_with_capacity_respects_floor() {
    let small: BiVec<u8> = BiVec::with_capacity(2);
    let large: BiVec<u8> = BiVec::with_capacity(100);

    assert_eq!(small.capacity(), MIN_CAPACITY);
    assert_eq!(large.capacity(), 100);
    assert!(large.is_empty());
}

// =============================================================================
// with_len(), from_elem()
// =============================================================================

#[test]
fn test_with_len() {
    let vec: BiVec<i32> = BiVec::with_len(10);

    assert_eq!(vec.len(), 10);
    assert_eq!(vec.capacity(), 10);
    assert!(vec.iter().all(|x| *x == 0));
}

#[test]
fn test_with_len_zero() {
    let vec: BiVec<i32> = BiVec::with_len(0);

    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), MIN_CAPACITY);
}

#[test]
fn test_from_elem() {
    let vec = BiVec::from_elem(String::from("x"), 3);

    assert_eq!(vec, ["x", "x", "x"]);
    assert!(BiVec::from_elem(String::from("x"), 0).is_empty());
}

// =============================================================================
// Clone
// =============================================================================

#[test]
fn test_clone_is_deep() {
    let mut x = BiVec::new();
    x.push_back(42);

    let mut y = x.clone();
    assert_eq!(y.len(), 1);
    assert_eq!(y[0], 42);

    y[0] = 10;
    assert_eq!(x[0], 42);
}

#[test]
fn test_clone_then_mutate_original() {
    let mut x = BiVec::new();
    x.push_back(42);

    let mut y = x.clone();
    x.push_back(0);

    assert_eq!(y.len(), 1);
    assert_eq!(y[0], 42);

    y.pop_back().expect("Failed to pop_back()");
    assert_eq!(y.len(), 0);
    assert_eq!(x, [42, 0]);
}

#[test]
fn test_clone_compacts_to_front() {
    let mut x: BiVec<u32> = BiVec::new();
    for i in 0..3 {
        x.push_front(i);
    }

    let y = x.clone();

    assert_eq!(y, x);
    assert_eq!(y.front_slack(), 0);
    assert_eq!(y.capacity(), MIN_CAPACITY);
}

#[test]
fn test_clone_from_keeps_identity_and_bumps_versions() {
    let mut x = bivec![1, 2, 3];
    let y = bivec![7, 8];
    let cursor = x.begin();
    let structure = x.structure_version();
    let realloc = x.realloc_version();

    x.clone_from(&y);

    assert_eq!(x, [7, 8]);
    assert!(x.structure_version() > structure);
    assert!(x.realloc_version() > realloc);
    // Same container, stale snapshot.
    assert!(matches!(
        cursor.check(&x),
        Err(BiVecError::InvalidCursor(_))
    ));
}

// =============================================================================
// take(), assign()
// =============================================================================

#[test]
fn test_take_moves_contents() {
    let mut x = bivec![1, 2, 3];
    let y = x.take();

    assert_eq!(y, [1, 2, 3]);
    assert!(x.is_empty());
    assert_eq!(x.capacity(), 0);
}

#[test]
fn test_take_source_is_reusable() {
    let mut x = bivec![1, 2, 3];
    let _y = x.take();

    x.push_back(4);
    x.push_front(0);

    assert_eq!(x, [0, 4]);
    assert!(x.capacity() >= MIN_CAPACITY);
}

#[test]
fn test_take_twice_yields_empty() {
    let mut x = bivec![1];
    let _y = x.take();
    let z = x.take();

    assert!(z.is_empty());
    assert_eq!(z.capacity(), 0);
}

#[test]
fn test_assign_adopts_buffer() {
    let mut x = bivec![1, 2, 3];
    let y: BiVec<i32> = BiVec::with_capacity(64);

    x.assign(y);

    assert!(x.is_empty());
    assert_eq!(x.capacity(), 64);
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn test_from_array_vec_and_slice() {
    let a = BiVec::from([1, 2, 3]);
    let b = BiVec::from(vec![1, 2, 3]);
    let c = BiVec::from(&[1, 2, 3][..]);

    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a, vec![1, 2, 3]);
}

#[test]
fn test_from_convertible_element_type() {
    let narrow: BiVec<u8> = bivec![1, 2, 255];
    let wide = BiVec::<u32>::from(&narrow);

    assert_eq!(wide, [1u32, 2, 255]);
    assert_eq!(narrow.len(), 3);
}

#[test]
fn test_from_convertible_empty() {
    let narrow: BiVec<u8> = BiVec::new();
    let wide = BiVec::<u64>::from(&narrow);

    assert!(wide.is_empty());
    assert_eq!(wide.capacity(), MIN_CAPACITY);
}

// =============================================================================
// FromIterator
// =============================================================================

#[test]
fn test_from_iter_exact_size_allocates_once() {
    let vec: BiVec<u32> = (0..100).collect();

    assert_eq!(vec.len(), 100);
    assert_eq!(vec.capacity(), 100);
    assert_eq!(vec.realloc_version(), 0);
}

#[test]
fn test_from_iter_unknown_size_grows() {
    let vec: BiVec<u32> = (0..100).filter(|x| x % 2 == 0).collect();

    assert_eq!(vec.len(), 50);
    assert!(vec.realloc_version() > 0);
    assert!(vec.iter().copied().eq((0u32..100).step_by(2)));
}

// =============================================================================
// from_cursors()
// =============================================================================

#[test]
fn test_from_cursors() -> Result<(), BiVecError> {
    let source = bivec![1, 2, 3, 4];
    let first = source.begin().offset(&source, 1)?;
    let last = source.begin().offset(&source, 3)?;

    let vec = BiVec::from_cursors(&source, &first, &last)?;

    assert_eq!(vec, [2, 3]);
    assert_eq!(vec.capacity(), MIN_CAPACITY);
    Ok(())
}

#[test]
fn test_from_cursors_full_range() -> Result<(), BiVecError> {
    let source: BiVec<u32> = (0..20).collect();

    let vec = BiVec::from_cursors(&source, &source.begin(), &source.end())?;

    assert_eq!(vec, source);
    assert_eq!(vec.capacity(), 20);
    Ok(())
}

#[test]
fn test_from_cursors_reversed() -> Result<(), BiVecError> {
    let source = bivec![1, 2, 3, 4];
    let first = source.begin().offset(&source, 3)?;
    let last = source.begin().offset(&source, 1)?;

    let result = BiVec::from_cursors(&source, &first, &last);

    assert_eq!(
        result,
        Err(BiVecError::CursorOutOfBounds {
            index: 3,
            delta: -2,
            len: 4
        })
    );
    Ok(())
}

#[test]
fn test_from_cursors_stale() {
    let mut source = bivec![1, 2, 3, 4];
    let first = source.begin();
    let last = source.end();
    source.push_back(5);

    let result = BiVec::from_cursors(&source, &first, &last);

    assert!(matches!(result, Err(BiVecError::InvalidCursor(_))));
}

// =============================================================================
// bivec![]
// =============================================================================

#[test]
fn test_macro_forms() {
    let empty: BiVec<u8> = bivec![];
    let listed = bivec![1, 2, 3,];
    let repeated = bivec![7u8; 5];

    assert!(empty.is_empty());
    assert_eq!(listed, [1, 2, 3]);
    assert_eq!(repeated, [7, 7, 7, 7, 7]);
}
