// Copyright (c) The rerun-failed Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of the applied-filter notice.

use crate::helpers::plural;
use owo_colors::{OwoColorize, Style};
use std::io::{self, Write};

/// Styles for the notice block.
///
/// The default is entirely unstyled, suitable for non-interactive output.
/// Call [`colorize`](Self::colorize) for terminal output; color detection is
/// the caller's concern.
#[derive(Clone, Debug, Default)]
pub struct Styles {
    /// Style for the block heading.
    pub heading: Style,

    /// Style for the failed-test count.
    pub count: Style,
}

impl Styles {
    /// Colorizes the styles for terminal output.
    pub fn colorize(&mut self) {
        self.heading = Style::new().bold();
        self.count = Style::new().bold().red();
    }
}

/// Notice emitted when a failed-test filter is applied to a run.
#[derive(Clone, Copy, Debug)]
pub struct FilterNotice {
    /// The number of previously-failed tests found in the summary.
    pub failed_count: usize,
}

impl FilterNotice {
    /// Writes the notice as a titled block to `writer`.
    pub fn write_to(&self, styles: &Styles, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", "rerun-failed".style(styles.heading))?;
        writeln!(
            writer,
            "  {} failed {} found",
            self.failed_count.style(styles.count),
            plural::tests_str(self.failed_count),
        )?;
        writeln!(writer, "  applying filter to run only failed tests")
    }
}
