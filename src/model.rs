//! Data structures describing the files found by a scan.
//!
//! A scan produces a flat [`FileList`] of [`FileRecord`]s, one per regular
//! file. Records are never modified after the scan; reporters only read them.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Metadata of one regular file, captured at scan time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    path: PathBuf,
    extension: String,
    size: u64,
    modified: SystemTime,
}

impl FileRecord {
    pub fn new(path: PathBuf, size: u64, modified: SystemTime) -> Self {
        let extension = extension_of(&path);
        Self {
            path,
            extension,
            size,
            modified,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The extension including its leading dot, or `""` when there is none.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }
}

/// Returns the extension of `path` with its leading dot.
///
/// Dotfiles such as `.bashrc` have no extension, while `name.` has the
/// extension `"."`.
pub fn extension_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}

/// Files in the order they were discovered, unless explicitly re-sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileList {
    files: Vec<FileRecord>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: FileRecord) {
        self.files.push(record);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.files.iter()
    }

    /// Orders the files from largest to smallest.
    ///
    /// The sort is stable: files of equal size keep their discovery order.
    pub fn sort_by_size_desc(&mut self) {
        self.files.sort_by(|a, b| b.size.cmp(&a.size));
    }

    /// The first `n` files of the list (fewer if the list is shorter).
    ///
    /// Only meaningful as "the largest files" after [`Self::sort_by_size_desc`].
    pub fn largest(&self, n: usize) -> &[FileRecord] {
        &self.files[..n.min(self.files.len())]
    }
}

impl FromIterator<FileRecord> for FileList {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
