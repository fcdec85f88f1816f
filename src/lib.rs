//! Scan a directory tree and report file counts and sizes per extension.
//!
//! The pipeline is scan → sort → aggregate → report: [`scan::scan`] builds a
//! [`model::FileList`], which is sorted once by size, aggregated once into a
//! [`stats::Stats`] snapshot, and then rendered by both [`summary`] and
//! [`report`].

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::config::Config;
use crate::stats::Stats;
use crate::theme::Painter;

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod report;
pub mod scan;
pub mod stats;
pub mod summary;
pub mod theme;

pub use error::Error;

/// Prompt printed before reading the root path.
pub const PROMPT: &str = "Enter folder path to scan: ";

/// Runs the scan-and-report pipeline with a fixed configuration.
pub struct App {
    config: Config,
    color: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            color: false,
        }
    }

    /// Enables themed output for the summary.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Scans `root`, prints the summary to `out` and writes the JSON report.
    ///
    /// A report that cannot be written is logged and otherwise ignored.
    ///
    /// # Errors
    /// Fails with [`Error::RootNotFound`] if `root` does not exist, before
    /// anything is printed or written, or if writing to `out` fails.
    pub fn run<W: Write>(&self, root: &Path, out: &mut W) -> anyhow::Result<Stats> {
        let report_cfg = &self.config.report;

        let mut files = scan::scan(root)?;
        info!("Scanned {} files under {}", files.len(), root.display());

        files.sort_by_size_desc();
        let stats = Stats::collect(&files, report_cfg.largest_files);

        let painter = Painter::new(&self.config.theme, self.color);
        summary::render(
            out,
            &stats,
            report_cfg.top_extensions,
            report_cfg.largest_files,
            &painter,
        )?;

        match report::write_report(&report_cfg.path, &stats) {
            Ok(()) => {
                writeln!(out, "\nJSON report written to {}", report_cfg.path.display())?;
            }
            Err(e) => error!("{e}"),
        }

        Ok(stats)
    }
}

/// Prints [`PROMPT`] to `prompt` and reads one line from `input`.
///
/// Only the line ending (`\n` or `\r\n`) is removed. End of input yields an
/// empty path, which never exists.
///
/// # Errors
/// Returns [`Error::Io`] if the prompt cannot be written or input cannot be read.
pub fn read_root_path<R: BufRead, W: Write>(
    input: &mut R,
    prompt: &mut W,
) -> error::Result<PathBuf> {
    write!(prompt, "{PROMPT}")?;
    prompt.flush()?;

    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    if line.ends_with(b"\n") {
        line.pop();
        if line.ends_with(b"\r") {
            line.pop();
        }
    }
    Ok(path_from_bytes(line))
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    PathBuf::from(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}
