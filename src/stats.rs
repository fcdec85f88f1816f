//! Aggregate statistics over a [`FileList`].
//!
//! [`Stats::collect`] runs once per scan; the summary and the JSON report
//! both render the same snapshot.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::FileList;

/// Number and total size of the files sharing one extension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionStats {
    pub count: u64,
    pub size: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LargeFile {
    pub path: String,
    pub size: u64,
}

/// Immutable aggregate of a scan. Field names double as the JSON schema.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_files: u64,
    pub total_size: u64,
    /// Keyed by the exact, case-sensitive extension (with its dot).
    pub file_types: BTreeMap<String, ExtensionStats>,
    /// Largest first.
    pub largest_files: Vec<LargeFile>,
}

impl Stats {
    /// Aggregates `files`, keeping at most `largest` entries in
    /// [`Stats::largest_files`].
    ///
    /// `files` must already be sorted with [`FileList::sort_by_size_desc`];
    /// the largest files are taken from its head.
    pub fn collect(files: &FileList, largest: usize) -> Self {
        let mut total_size = 0u64;
        let mut file_types: BTreeMap<String, ExtensionStats> = BTreeMap::new();

        for file in files {
            total_size = total_size.saturating_add(file.size());
            let entry = file_types.entry(file.extension().to_string()).or_default();
            entry.count += 1;
            entry.size = entry.size.saturating_add(file.size());
        }

        let largest_files = files
            .largest(largest)
            .iter()
            .map(|f| LargeFile {
                path: f.path().to_string_lossy().into_owned(),
                size: f.size(),
            })
            .collect();

        Self {
            total_files: files.len() as u64,
            total_size,
            file_types,
            largest_files,
        }
    }

    /// The `n` most common extensions, by descending count.
    ///
    /// Equal counts are ordered by extension so the listing is reproducible.
    pub fn top_extensions(&self, n: usize) -> Vec<(&str, ExtensionStats)> {
        let mut ranked: Vec<(&str, ExtensionStats)> = self
            .file_types
            .iter()
            .map(|(ext, stats)| (ext.as_str(), *stats))
            .collect();
        ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}
