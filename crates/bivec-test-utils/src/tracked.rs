// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Instrumented element type for lifetime accounting.
//!
//! Counters are thread-local: the default test harness runs each test on its
//! own thread, so tests never observe each other's elements.

use std::cell::Cell;

thread_local! {
    static LEDGER: Cell<Ledger> = const { Cell::new(Ledger::ZERO) };
}

/// Snapshot of the lifetime events of every [`Tracked`] on the current thread.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    /// Values created through [`Tracked::new`] or `Default`.
    pub constructions: usize,
    /// Values created through `Clone`.
    pub clones: usize,
    /// Values dropped.
    pub drops: usize,
}

impl Ledger {
    const ZERO: Self = Self {
        constructions: 0,
        clones: 0,
        drops: 0,
    };

    /// Zeroes the current thread's counters.
    pub fn reset() {
        LEDGER.with(|ledger| ledger.set(Self::ZERO));
    }

    /// Returns the current thread's counters.
    pub fn snapshot() -> Self {
        LEDGER.with(Cell::get)
    }

    /// Values created but not yet dropped.
    pub fn live(&self) -> usize {
        self.constructions + self.clones - self.drops
    }

    fn record(update: impl FnOnce(&mut Self)) {
        LEDGER.with(|ledger| {
            let mut current = ledger.get();
            update(&mut current);
            ledger.set(current);
        });
    }
}

/// A value whose constructions, clones and drops are counted in [`Ledger`].
///
/// Moves are not counted: in Rust they are plain memory copies, which is
/// exactly what relocation should use.
#[derive(Debug, PartialEq, Eq)]
pub struct Tracked {
    value: u32,
}

impl Tracked {
    /// Creates a tracked value.
    pub fn new(value: u32) -> Self {
        Ledger::record(|ledger| ledger.constructions += 1);
        Self { value }
    }

    /// The payload.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Ledger::record(|ledger| ledger.clones += 1);
        Self { value: self.value }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        Ledger::record(|ledger| ledger.drops += 1);
    }
}
