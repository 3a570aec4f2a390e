// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for bivec.
//!
//! ## License
//!
//! GPL-3.0-only

mod plans;
mod tracked;

pub use plans::{End, expected_layout, push_plans};
pub use tracked::{Ledger, Tracked};
