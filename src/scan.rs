use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{FileList, FileRecord};

/// Walks `root` depth-first and records every regular file below it.
///
/// Entries are visited in the order the OS lists them, and a subdirectory is
/// fully walked before its later siblings, the same order plain recursion
/// would give. The walk keeps a stack of open directories instead of
/// recursing, so deep trees cannot overflow the call stack.
///
/// Symlinks are never followed, whether they point at files or directories.
/// Sockets, FIFOs and devices are skipped too.
///
/// A directory that cannot be opened or listed is logged as a warning and
/// the rest of it is abandoned; the walk carries on with what is left.
///
/// # Errors
/// Returns [`Error::RootNotFound`] if `root` does not exist. Nothing else
/// aborts the scan.
pub fn scan(root: &Path) -> Result<FileList> {
    if !root.exists() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }

    let mut files = FileList::new();
    let mut stack: Vec<(PathBuf, ReadDir)> = Vec::new();
    let mut visited_dirs = 0usize;

    if let Some(entries) = open_dir(root) {
        stack.push((root.to_path_buf(), entries));
        visited_dirs += 1;
    }

    loop {
        let Some((_, entries)) = stack.last_mut() else {
            break;
        };

        let entry = match entries.next() {
            Some(Ok(entry)) => entry,
            Some(Err(source)) => {
                if let Some((dir, _)) = stack.pop() {
                    report_inaccessible(dir, source);
                }
                continue;
            }
            None => {
                stack.pop();
                continue;
            }
        };

        // file_type() does not traverse symlinks
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                warn!("Can't stat {}: {e}", entry.path().display());
                continue;
            }
        };

        let path = entry.path();
        if file_type.is_dir() {
            if let Some(children) = open_dir(&path) {
                stack.push((path, children));
                visited_dirs += 1;
            }
        } else if file_type.is_file() {
            match entry.metadata() {
                Ok(meta) => {
                    let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
                    files.push(FileRecord::new(path, meta.len(), modified));
                }
                Err(e) => warn!("Can't stat {}: {e}", path.display()),
            }
        }
    }

    debug!(
        "[scan] {}: {} directories, {} files",
        root.display(),
        visited_dirs,
        files.len()
    );

    Ok(files)
}

fn open_dir(dir: &Path) -> Option<ReadDir> {
    match fs::read_dir(dir) {
        Ok(entries) => Some(entries),
        Err(source) => {
            report_inaccessible(dir.to_path_buf(), source);
            None
        }
    }
}

fn report_inaccessible(path: PathBuf, source: std::io::Error) {
    warn!("{}", Error::SubtreeInaccessible { path, source });
}
