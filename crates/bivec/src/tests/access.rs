// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{BiVec, BiVecError, bivec};

// =============================================================================
// Index, IndexMut
// =============================================================================

#[test]
fn test_bracket_operator() {
    let mut x = BiVec::new();
    x.push_back(42);
    assert_eq!(x[0], 42);

    x[0] = 10;
    assert_eq!(x[0], 10);
}

#[test]
fn test_range_checks() {
    let mut x: BiVec<i32> = BiVec::with_len(10);
    for k in 0..10 {
        x[k] = k as i32;
    }

    assert_eq!(x.at_mut(10), Err(BiVecError::OutOfRange { index: 10, len: 10 }));
    assert!(x.at_mut(9).map(|slot| *slot = 5).is_ok());
    assert_eq!(x[9], 5);
}

#[test]
#[should_panic(expected = "index 10 out of range for length 10")]
fn test_index_out_of_range_panics() {
    let x: BiVec<i32> = BiVec::with_len(10);
    let _value = x[10];
}

#[test]
#[should_panic(expected = "out of range")]
fn test_index_mut_out_of_range_panics() {
    let mut x: BiVec<i32> = BiVec::with_len(10);
    x[10] = 42;
}

// =============================================================================
// at(), at_mut(), get()
// =============================================================================

#[test]
fn test_at_after_front_pushes() {
    let mut x = BiVec::new();
    x.push_front(2);
    x.push_front(1);

    assert_eq!(x.at(0), Ok(&1));
    assert_eq!(x.at(1), Ok(&2));
    assert_eq!(x.at(2), Err(BiVecError::OutOfRange { index: 2, len: 2 }));
}

#[test]
fn test_at_huge_index() {
    let x = bivec![1, 2, 3];

    assert_eq!(
        x.at(usize::MAX),
        Err(BiVecError::OutOfRange {
            index: usize::MAX,
            len: 3
        })
    );
}

#[test]
fn test_slice_access_through_deref() {
    let mut x = bivec![3, 1, 2];
    x.sort();

    assert_eq!(x.get(0), Some(&1));
    assert_eq!(x.get(3), None);
    assert_eq!(x.iter().sum::<i32>(), 6);
}

// =============================================================================
// front(), back()
// =============================================================================

#[test]
fn test_front_back() -> Result<(), BiVecError> {
    let mut x = bivec![1, 2, 3];

    assert_eq!(*x.front()?, 1);
    assert_eq!(*x.back()?, 3);

    *x.front_mut()? = 10;
    *x.back_mut()? = 30;

    assert_eq!(x, [10, 2, 30]);
    Ok(())
}

#[test]
fn test_front_back_empty() {
    let mut x: BiVec<u8> = BiVec::new();

    assert_eq!(x.front(), Err(BiVecError::Empty));
    assert_eq!(x.back(), Err(BiVecError::Empty));
    assert_eq!(x.front_mut(), Err(BiVecError::Empty));
    assert_eq!(x.back_mut(), Err(BiVecError::Empty));
}

// =============================================================================
// Element assignment is not structural
// =============================================================================

#[test]
fn test_assignment_keeps_versions() {
    let mut x = bivec![1, 2, 3];
    let structure = x.structure_version();
    let realloc = x.realloc_version();

    x[1] = 20;
    *x.at_mut(2).expect("Failed to at_mut(2)") = 30;
    x.as_mut_slice()[0] = 10;
    for item in &mut x {
        *item += 1;
    }

    assert_eq!(x, [11, 21, 31]);
    assert_eq!(x.structure_version(), structure);
    assert_eq!(x.realloc_version(), realloc);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn test_error_messages() {
    assert_eq!(
        BiVecError::OutOfRange { index: 4, len: 2 }.to_string(),
        "index 4 out of range for length 2"
    );
    assert_eq!(BiVecError::Empty.to_string(), "container is empty");
    assert_eq!(
        BiVecError::InvalidCursor(crate::Severity::Moderate).to_string(),
        "invalid cursor: Moderate"
    );
    assert_eq!(
        BiVecError::ForeignCursor.to_string(),
        "cursor belongs to a different container"
    );
}
