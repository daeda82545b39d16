// Copyright (c) The rerun-failed Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform-specific default location for the summary file.

use crate::errors::CacheDirError;
use camino::Utf8PathBuf;
use etcetera::{BaseStrategy, choose_base_strategy};

/// The file name the summary is stored under.
pub const SUMMARY_FILE_NAME: &str = "summary.json";

/// The directory under the platform cache directory that namespaces this tool.
const CACHE_DIR_NAME: &str = "rerun-failed";

/// Returns the default path of the summary file.
///
/// The summary lives in the platform cache directory, namespaced to this
/// tool:
///
/// - Linux: `$XDG_CACHE_HOME/rerun-failed/summary.json` or
///   `~/.cache/rerun-failed/summary.json`
/// - macOS: `~/Library/Caches/rerun-failed/summary.json`
/// - Windows: `%LOCALAPPDATA%\rerun-failed\summary.json`
///
/// Returns an error if the platform cache directory cannot be determined, or
/// if it is not valid UTF-8. No directories are created here: that happens
/// lazily, at the first write.
pub fn default_summary_path() -> Result<Utf8PathBuf, CacheDirError> {
    let strategy = choose_base_strategy().map_err(|_| CacheDirError::BaseDirStrategy)?;
    let cache_dir = strategy.cache_dir().join(CACHE_DIR_NAME);
    let cache_dir = Utf8PathBuf::from_path_buf(cache_dir)
        .map_err(|path| CacheDirError::CacheDirNotUtf8 { path })?;
    Ok(cache_dir.join(SUMMARY_FILE_NAME))
}
