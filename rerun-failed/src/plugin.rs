// Copyright (c) The rerun-failed Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The failed-test tracker: bridges persisted failure state and the run's
//! filter configuration.

use crate::{
    cache_dir::default_summary_path,
    errors::{CacheDirError, InstallError},
    reporter::{FilterNotice, Styles},
    runner::{RunSummary, RunnerConfig, TeardownHook},
    summary::{FailedTestsSummary, SummaryStore},
};
use camino::{Utf8Path, Utf8PathBuf};
use futures::FutureExt;
use std::io::Write;
use tracing::debug;

/// Options for [`RunFailedTests`]. All of them are optional.
#[derive(Clone, Debug, Default)]
pub struct RunFailedTestsOpts {
    summary_file_path: Option<Utf8PathBuf>,
    ignore_files_filter: bool,
    styles: Styles,
}

impl RunFailedTestsOpts {
    /// Creates a new set of options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the path the summary file lives at.
    ///
    /// Defaults to `summary.json` inside a per-user cache directory
    /// namespaced to this tool (see
    /// [`default_summary_path`](crate::cache_dir::default_summary_path)).
    pub fn summary_file_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.summary_file_path = Some(path.into());
        self
    }

    /// When true, clears any file-path filter at the point a failed-test
    /// filter is applied, so that test titles alone determine selection
    /// regardless of which files they live in. Defaults to false.
    pub fn ignore_files_filter(mut self, ignore: bool) -> Self {
        self.ignore_files_filter = ignore;
        self
    }

    /// Sets the styles used to render the notice block.
    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Resolves the options into an immutable [`RunFailedTests`] value.
    ///
    /// The effective summary path is computed here, exactly once: an explicit
    /// path is taken as-is, and the cache-dir default is only consulted when
    /// no path was supplied. No file I/O happens during resolution.
    pub fn resolve(self) -> Result<RunFailedTests, CacheDirError> {
        let summary_path = match self.summary_file_path {
            Some(path) => path,
            None => default_summary_path()?,
        };
        debug!("resolved summary file path to {summary_path}");

        Ok(RunFailedTests {
            store: SummaryStore::new(summary_path),
            ignore_files_filter: self.ignore_files_filter,
            styles: self.styles,
        })
    }
}

/// The result of a successful [`RunFailedTests::install`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InstallOutcome {
    /// The caller had already supplied a test-title filter. Nothing was done:
    /// the summary file was not read and no teardown hook was registered.
    SkippedExistingFilter,

    /// Setup completed and a teardown hook was registered.
    Installed {
        /// Whether a failed-test filter was applied to the run.
        filter_applied: bool,
    },
}

/// The failed-test tracker plugin, created by resolving
/// [`RunFailedTestsOpts`].
#[derive(Clone, Debug)]
pub struct RunFailedTests {
    store: SummaryStore,
    ignore_files_filter: bool,
    styles: Styles,
}

impl RunFailedTests {
    /// Returns the resolved path of the summary file.
    pub fn summary_path(&self) -> &Utf8Path {
        self.store.path()
    }

    /// Installs the plugin into the host runner's configuration. Invoked once
    /// at run setup, before any test executes.
    ///
    /// If the caller already supplied a test-title filter, this is a complete
    /// no-op: the summary file is not read and no teardown hook is
    /// registered. Otherwise the persisted summary is loaded; if it records
    /// any failures, the title filter is replaced with them and a notice is
    /// written to `output`. A teardown hook that overwrites the summary with
    /// the new run's failures is registered in either case.
    pub async fn install(
        &self,
        config: &mut RunnerConfig,
        output: &mut dyn Write,
    ) -> Result<InstallOutcome, InstallError> {
        // An explicit caller-supplied filter always wins and disables this
        // feature for the run.
        if !config.filters.tests.is_empty() {
            debug!("test-title filter already present, skipping failed-test filter");
            return Ok(InstallOutcome::SkippedExistingFilter);
        }

        let summary = self.store.load().await?;

        let filter_applied = !summary.is_empty();
        if filter_applied {
            debug!(
                "applying failed-test filter with {} titles from {}",
                summary.tests.len(),
                self.store.path()
            );

            let notice = FilterNotice {
                failed_count: summary.tests.len(),
            };
            notice
                .write_to(&self.styles, output)
                .map_err(InstallError::NoticeWrite)?;

            config.filters.tests = summary.tests;
            if self.ignore_files_filter {
                config.filters.files = Vec::new();
            }
        }

        config.teardown.push(persist_hook(self.store.clone()));

        Ok(InstallOutcome::Installed { filter_applied })
    }
}

/// Builds the teardown hook that overwrites the persisted summary with the
/// failures of the run that just completed -- including an empty list when
/// everything passed.
fn persist_hook(store: SummaryStore) -> TeardownHook {
    Box::new(move |summary: &RunSummary| {
        async move {
            let record = FailedTestsSummary {
                tests: summary.failed_test_titles.clone(),
            };
            store.save(&record).await?;
            Ok(())
        }
        .boxed()
    })
}
