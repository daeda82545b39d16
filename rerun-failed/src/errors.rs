// Copyright (c) The rerun-failed Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by rerun-failed.

use camino::Utf8PathBuf;
use std::{error::Error, fmt, path::PathBuf};
use thiserror::Error;

/// An error that occurred while resolving the default summary file path.
#[derive(Debug, Error)]
pub enum CacheDirError {
    /// The platform base directory strategy could not be determined.
    #[error("the platform cache directory could not be determined")]
    BaseDirStrategy,

    /// The cache directory is not valid UTF-8.
    #[error("cache directory `{}` is not valid UTF-8", .path.display())]
    CacheDirNotUtf8 {
        /// The non-UTF-8 path.
        path: PathBuf,
    },
}

/// An error that occurred while reading a persisted summary file.
///
/// A missing file is not represented here: [`SummaryStore::load`] maps
/// `io::ErrorKind::NotFound` to the empty summary before this type comes into
/// play. Everything else -- permission errors, malformed JSON -- is fatal to
/// run setup.
///
/// [`SummaryStore::load`]: crate::summary::SummaryStore::load
#[derive(Debug, Error)]
pub enum SummaryReadError {
    /// The file exists but could not be read.
    #[error("rerun-failed: failed to read summary file at `{path}`")]
    Read {
        /// The path that failed to be read.
        path: Utf8PathBuf,
        /// The underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// The file contents were not a valid summary document.
    #[error("rerun-failed: failed to deserialize summary file at `{path}`")]
    Deserialize {
        /// The path that failed to be deserialized.
        path: Utf8PathBuf,
        /// The underlying deserialization error.
        #[source]
        error: serde_json::Error,
    },
}

/// An error that occurred while writing the summary file during teardown.
#[derive(Debug, Error)]
pub enum SummaryWriteError {
    /// The parent directory of the summary file could not be created.
    #[error("failed to create directory `{path}`")]
    CreateDir {
        /// The directory path that failed to be created.
        path: Utf8PathBuf,
        /// The underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// The summary could not be serialized.
    #[error("failed to serialize summary")]
    Serialize {
        /// The underlying serialization error.
        #[source]
        error: serde_json::Error,
    },

    /// The summary could not be written to disk.
    #[error("failed to write summary file to `{path}`")]
    Write {
        /// The path that failed to be written.
        path: Utf8PathBuf,
        /// The underlying write error.
        #[source]
        error: atomicwrites::Error<std::io::Error>,
    },
}

/// An error that occurred while installing the failed-test filter during run
/// setup.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The persisted summary could not be loaded.
    #[error(transparent)]
    SummaryRead(#[from] SummaryReadError),

    /// The filter notice could not be written to the output.
    #[error("failed to write filter notice")]
    NoticeWrite(#[source] std::io::Error),
}

/// Displays an error along with its entire source chain.
pub struct DisplayErrorChain<E>(E);

impl<E: Error> DisplayErrorChain<E> {
    /// Creates a new `DisplayErrorChain` over the provided error.
    pub fn new(error: E) -> Self {
        Self(error)
    }
}

impl<E: Error> fmt::Display for DisplayErrorChain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;

        let mut source = self.0.source();
        while let Some(error) = source {
            write!(f, "\n  caused by: {error}")?;
            source = error.source();
        }

        Ok(())
    }
}
