// Copyright (c) The rerun-failed Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Run only the tests that failed in the previous run.
//!
//! This crate is a plugin for a host test runner. At the end of each run it
//! persists the titles of the tests that failed to a small JSON summary file,
//! and at the start of the next run it narrows the runner's title filter to
//! just those titles -- until they pass, at which point the filter goes away
//! again.
//!
//! The plugin never overrides a filter the caller supplied themselves: if the
//! run configuration already carries a test-title filter, setup is a complete
//! no-op for that run.
//!
//! ```no_run
//! use rerun_failed::plugin::RunFailedTestsOpts;
//! use rerun_failed::runner::{RunSummary, RunnerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let plugin = RunFailedTestsOpts::new().ignore_files_filter(true).resolve()?;
//!
//! let mut config = RunnerConfig::default();
//! plugin.install(&mut config, &mut std::io::stderr()).await?;
//!
//! // ... the host runner executes tests, honoring config.filters ...
//!
//! let summary = RunSummary {
//!     failed_test_titles: vec!["auth: rejects expired token".to_owned()],
//! };
//! config.run_teardown(&summary).await?;
//! # Ok(())
//! # }
//! ```
//!
//! If two runner processes share a summary file path, the last writer wins:
//! no cross-process locking is performed.

pub mod cache_dir;
pub mod errors;
mod helpers;
pub mod plugin;
pub mod reporter;
pub mod runner;
pub mod summary;
