// Copyright (c) The rerun-failed Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence of failed-test titles across runs.

use crate::errors::{SummaryReadError, SummaryWriteError};
use atomicwrites::{AllowOverwrite, AtomicFile};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::debug;

/// The record of failed test titles from the most recent completed run,
/// serialized to disk.
///
/// An absent `tests` key reads as an empty list. The write side always emits
/// the key, and emits nothing else: unknown keys present in an existing file
/// are not preserved across a write.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct FailedTestsSummary {
    /// Titles of the tests that failed, in the order the runner reported them.
    #[serde(default)]
    pub tests: Vec<String>,
}

impl FailedTestsSummary {
    /// Returns true if no failed tests are recorded.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

/// Manages persistence of the failed-test summary at a fixed path.
///
/// At most one load and one save happen per run. No cross-process locking is
/// performed: concurrent runners sharing a path race, and the last writer
/// wins.
#[derive(Clone, Debug)]
pub struct SummaryStore {
    path: Utf8PathBuf,
}

impl SummaryStore {
    /// Creates a new store backed by the file at `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path the summary is persisted at.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Loads the summary from disk.
    ///
    /// A missing file yields the empty summary. Any other read or parse
    /// failure is an error.
    pub async fn load(&self) -> Result<FailedTestsSummary, SummaryReadError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!("no summary file at {}", self.path);
                return Ok(FailedTestsSummary::default());
            }
            Err(error) => {
                return Err(SummaryReadError::Read {
                    path: self.path.clone(),
                    error,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|error| SummaryReadError::Deserialize {
            path: self.path.clone(),
            error,
        })
    }

    /// Saves the summary to disk, replacing any previous contents.
    ///
    /// The parent directory is created if it doesn't exist. The file is
    /// replaced atomically: contents are written to a temporary file in the
    /// same directory, which is then renamed over the destination.
    pub async fn save(&self, summary: &FailedTestsSummary) -> Result<(), SummaryWriteError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|error| {
                SummaryWriteError::CreateDir {
                    path: parent.to_owned(),
                    error,
                }
            })?;
        }

        let json = serde_json::to_string_pretty(summary)
            .map_err(|error| SummaryWriteError::Serialize { error })?;

        debug!(
            "writing summary with {} failed tests to {}",
            summary.tests.len(),
            self.path
        );

        AtomicFile::new(&self.path, AllowOverwrite)
            .write(|file| file.write_all(json.as_bytes()))
            .map_err(|error| SummaryWriteError::Write {
                path: self.path.clone(),
                error,
            })?;

        Ok(())
    }
}
