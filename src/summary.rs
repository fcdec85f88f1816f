//! Plain-text summary of a scan.
//!
//! Renders a [`Stats`] snapshot in this shape:
//! ```text
//! ===== FILE SYSTEM SUMMARY =====
//! Total files: 3
//! Total size: 1.5 KB
//!
//! Top file types:
//! .txt : 2 files, 1 KB
//! .rs : 1 files, 512 B
//!
//! Top 10 largest files:
//! docs/a.txt : 1000 B
//! src/main.rs : 512 B
//! docs/b.txt : 24 B
//! ```
//!
//! Files without an extension are listed as `(none)` here; the JSON report
//! keeps their key as the empty string.

use std::io::{self, Write};

use crate::format::format_size;
use crate::stats::Stats;
use crate::theme::Painter;

/// Label used for files without an extension.
const NO_EXTENSION: &str = "(none)";

/// Writes the summary of `stats` to `out`.
///
/// At most `top_extensions` extensions are listed, ranked by file count,
/// followed by at most `largest_files` of the files kept in `stats`.
///
/// # Errors
/// Only fails if writing to `out` fails.
pub fn render<W: Write>(
    out: &mut W,
    stats: &Stats,
    top_extensions: usize,
    largest_files: usize,
    painter: &Painter<'_>,
) -> io::Result<()> {
    let theme = painter.theme();
    let size = |bytes: u64| painter.paint(&theme.size, &format_size(bytes));

    writeln!(
        out,
        "\n{}",
        painter.paint(&theme.heading, "===== FILE SYSTEM SUMMARY =====")
    )?;
    writeln!(
        out,
        "{} {}",
        painter.paint(&theme.label, "Total files:"),
        stats.total_files
    )?;
    writeln!(
        out,
        "{} {}",
        painter.paint(&theme.label, "Total size:"),
        size(stats.total_size)
    )?;

    writeln!(out, "\n{}", painter.paint(&theme.heading, "Top file types:"))?;
    for (ext, ext_stats) in stats.top_extensions(top_extensions) {
        let label = if ext.is_empty() { NO_EXTENSION } else { ext };
        writeln!(
            out,
            "{} : {} files, {}",
            painter.paint(&theme.extension, label),
            ext_stats.count,
            size(ext_stats.size)
        )?;
    }

    let heading = format!("Top {largest_files} largest files:");
    writeln!(out, "\n{}", painter.paint(&theme.heading, &heading))?;
    for file in stats.largest_files.iter().take(largest_files) {
        writeln!(
            out,
            "{} : {}",
            painter.paint(&theme.path, &file.path),
            size(file.size)
        )?;
    }

    out.flush()
}
