// Copyright (c) The rerun-failed Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! General support code for rerun-failed.

/// Utilities for pluralizing various words based on count.
pub mod plural {
    /// Returns "test" if `count` is 1, otherwise "tests".
    pub fn tests_str(count: usize) -> &'static str {
        if count == 1 { "test" } else { "tests" }
    }
}
