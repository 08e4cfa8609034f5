//! The small slice of the filesystem the scanners need.
//!
//! Entry kinds are read without following symlinks, so a symlinked directory
//! shows up as [`EntryKind::Symlink`] and is never descended into.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Symlink,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

pub trait FileSystem {
    /// Lists `dir` in the order the platform returns entries.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;

    /// True when `path` exists and is a directory (not a link to one).
    fn is_dir(&self, path: &Path) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        Ok(keep_readable(dir, fs::read_dir(dir)?.map(to_entry)))
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}

fn to_entry(entry: io::Result<fs::DirEntry>) -> io::Result<DirEntry> {
    let entry = entry?;
    let file_type = entry.file_type()?;

    let kind = if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };

    Ok(DirEntry {
        name: entry.file_name().to_string_lossy().into_owned(),
        path: entry.path(),
        kind,
    })
}

/// Drops entries that could not be read (e.g. removed mid-listing) and keeps
/// their siblings.
fn keep_readable<I>(dir: &Path, entries: I) -> Vec<DirEntry>
where
    I: IntoIterator<Item = io::Result<DirEntry>>,
{
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                None
            }
        })
        .collect()
}
