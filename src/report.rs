//! JSON report writer.
//!
//! The report is the [`Stats`] snapshot serialized as-is:
//! ```text
//! {
//!   "total_files": 1,
//!   "total_size": 10,
//!   "file_types": {
//!     ".txt": {
//!       "count": 1,
//!       "size": 10
//!     }
//!   },
//!   "largest_files": [
//!     {
//!       "path": "root/a.txt",
//!       "size": 10
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::stats::Stats;

/// Renders `stats` as pretty-printed JSON with a trailing newline.
pub fn to_json(stats: &Stats) -> Result<String> {
    let mut text = serde_json::to_string_pretty(stats)?;
    text.push('\n');
    Ok(text)
}

/// Writes the JSON report to `path`, replacing any existing file.
///
/// # Errors
/// Returns [`Error::Report`] if the file cannot be created or written.
pub fn write_report(path: &Path, stats: &Stats) -> Result<()> {
    let text = to_json(stats)?;
    fs::write(path, text).map_err(|source| Error::Report {
        path: path.to_path_buf(),
        source,
    })
}
