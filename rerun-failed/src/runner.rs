// Copyright (c) The rerun-failed Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The minimal surface of the host test runner consumed by this plugin.
//!
//! The host runner owns test discovery, filter application, and the
//! invocation of teardown hooks. The types here model only the slice of its
//! configuration this plugin reads and mutates.

use camino::Utf8PathBuf;
use debug_ignore::DebugIgnore;
use futures::future::BoxFuture;

/// Type-erased error returned by teardown hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An async callback invoked by the host runner once, after all tests in a
/// run have completed -- regardless of whether the run passed or failed.
pub type TeardownHook =
    Box<dyn for<'a> FnOnce(&'a RunSummary) -> BoxFuture<'a, Result<(), BoxError>> + Send>;

/// Filters restricting which tests a run executes.
#[derive(Clone, Debug, Default)]
pub struct TestFilters {
    /// Test titles to restrict the run to. Empty means no title filter.
    pub tests: Vec<String>,

    /// File paths to restrict the run to. Empty means no file filter.
    pub files: Vec<Utf8PathBuf>,
}

/// The host runner's configuration, as far as this plugin is concerned.
#[derive(Debug, Default)]
pub struct RunnerConfig {
    /// Active filters for the run.
    pub filters: TestFilters,

    /// Callbacks invoked after the run completes, in registration order.
    pub teardown: DebugIgnore<Vec<TeardownHook>>,
}

impl RunnerConfig {
    /// Invokes the registered teardown hooks in order, stopping at the first
    /// error.
    ///
    /// This models the host runner's teardown phase: each hook is awaited to
    /// completion before the next one starts. Hooks are consumed; calling
    /// this twice runs nothing the second time.
    pub async fn run_teardown(&mut self, summary: &RunSummary) -> Result<(), BoxError> {
        for hook in self.teardown.drain(..) {
            hook(summary).await?;
        }
        Ok(())
    }
}

/// Results of a completed run, as handed to teardown hooks.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    /// Titles of the tests that failed, in the order the runner reported
    /// them. Empty if everything passed.
    pub failed_test_titles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use std::sync::{Arc, Mutex};

    fn recording_hook(order: Arc<Mutex<Vec<usize>>>, index: usize) -> TeardownHook {
        Box::new(move |_summary: &RunSummary| {
            async move {
                order.lock().unwrap().push(index);
                Ok(())
            }
            .boxed()
        })
    }

    #[tokio::test]
    async fn test_teardown_hooks_run_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut config = RunnerConfig::default();
        config.teardown.push(recording_hook(order.clone(), 1));
        config.teardown.push(recording_hook(order.clone(), 2));

        config.run_teardown(&RunSummary::default()).await.unwrap();

        assert_eq!(*order.lock().unwrap(), vec![1, 2]);
        assert!(config.teardown.is_empty(), "hooks should be consumed");
    }

    #[tokio::test]
    async fn test_teardown_stops_at_first_error() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut config = RunnerConfig::default();
        config.teardown.push(Box::new(|_summary: &RunSummary| {
            async { Err::<(), BoxError>("boom".into()) }.boxed()
        }));
        config.teardown.push(recording_hook(order.clone(), 2));

        let error = config
            .run_teardown(&RunSummary::default())
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "boom");
        assert!(
            order.lock().unwrap().is_empty(),
            "later hooks should not run after an error"
        );
    }
}
