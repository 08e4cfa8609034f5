//! Locating git repositories below a directory.
//!
//! The walk stops at the first repository root on every branch, so the
//! returned repositories never contain one another.

use crate::fs::{FileSystem, OsFileSystem};
use crate::ignore::IgnoreRules;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

const GIT_DIR: &str = ".git";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitRepo {
    pub path: PathBuf,
    pub name: String,
}

impl GitRepo {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        GitRepo { path, name }
    }
}

/// Receives the directories a scan could not read.
pub trait Diagnostics {
    fn unreadable_dir(&self, dir: &Path, error: &io::Error);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn unreadable_dir(&self, dir: &Path, error: &io::Error) {
        warn!(dir = %dir.display(), error = %error, "cannot read directory");
    }
}

pub struct RepoScanner<F: FileSystem, D: Diagnostics> {
    fs: F,
    diagnostics: D,
    rules: IgnoreRules,
}

impl<F: FileSystem, D: Diagnostics> RepoScanner<F, D> {
    pub fn new(fs: F, diagnostics: D) -> Self {
        RepoScanner {
            fs,
            diagnostics,
            rules: IgnoreRules::repository_scan(),
        }
    }

    pub fn with_rules(mut self, rules: IgnoreRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn scan(&self, directory: &Path, max_depth: usize) -> Vec<GitRepo> {
        let mut repos = Vec::new();
        self.scan_dir(directory, 0, max_depth, &mut repos);
        repos
    }

    fn scan_dir(&self, dir: &Path, depth: usize, max_depth: usize, repos: &mut Vec<GitRepo>) {
        if depth > max_depth {
            return;
        }

        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                self.diagnostics.unreadable_dir(dir, &e);
                return;
            }
        };

        // Checked before any sibling so a repo root never also yields a nested repo.
        if entries.iter().any(|e| e.is_dir() && e.name == GIT_DIR) {
            repos.push(GitRepo::new(dir.to_path_buf()));
            return;
        }

        for entry in entries {
            if !entry.is_dir() || self.rules.is_ignored(&entry.name) {
                continue;
            }

            if self.fs.is_dir(&entry.path.join(GIT_DIR)) {
                repos.push(GitRepo {
                    path: entry.path,
                    name: entry.name,
                });
                continue;
            }

            self.scan_dir(&entry.path, depth + 1, max_depth, repos);
        }
    }
}

pub fn scan_for_repos(directory: &Path, max_depth: usize) -> Vec<GitRepo> {
    RepoScanner::new(OsFileSystem, TracingDiagnostics).scan(directory, max_depth)
}
