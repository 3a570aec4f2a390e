// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exhaustive push plans for double-ended containers.

use std::collections::VecDeque;

/// Which end of a container an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    /// Before the first element.
    Front,
    /// After the last element.
    Back,
}

/// Every sequence of `n` ends: `2^n` plans, each `n` long.
///
/// # Panics
///
/// Panics if `n >= usize::BITS`.
pub fn push_plans(n: usize) -> Vec<Vec<End>> {
    assert!(n < usize::BITS as usize, "push_plans: n = {n} is too large");

    (0..1usize << n)
        .map(|mask| {
            (0..n)
                .map(|bit| {
                    if mask & (1 << bit) == 0 {
                        End::Back
                    } else {
                        End::Front
                    }
                })
                .collect()
        })
        .collect()
}

/// Layout produced by pushing `0, 1, 2, ...` following `plan`.
pub fn expected_layout(plan: &[End]) -> Vec<usize> {
    let mut model = VecDeque::with_capacity(plan.len());
    for (value, end) in plan.iter().enumerate() {
        match end {
            End::Front => model.push_front(value),
            End::Back => model.push_back(value),
        }
    }

    model.into()
}
