//! Directory enumeration for the fuzzy directory picker.

use crate::fs::{FileSystem, OsFileSystem};
use crate::ignore::IgnoreRules;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

const COMMON_PROJECT_DIRS: &[&str] = &[
    "projects",
    "Projects",
    "code",
    "Code",
    "dev",
    "src",
    "workspace",
    "repos",
    "github",
];

pub struct DirectoryScanner<F: FileSystem> {
    fs: F,
    rules: IgnoreRules,
}

impl<F: FileSystem> DirectoryScanner<F> {
    pub fn new(fs: F) -> Self {
        DirectoryScanner {
            fs,
            rules: IgnoreRules::directory_picker(),
        }
    }

    pub fn with_rules(mut self, rules: IgnoreRules) -> Self {
        self.rules = rules;
        self
    }

    /// Depth-first listing of every non-ignored directory under `start`.
    ///
    /// Entries `max_depth` levels below the start are listed but not
    /// descended into. Unreadable directories contribute nothing.
    pub fn scan(&self, start: &Path, max_depth: usize, include_start: bool) -> Vec<PathBuf> {
        let mut found = Vec::new();
        if include_start {
            found.push(start.to_path_buf());
        }
        self.scan_dir(start, 0, max_depth, &mut found);
        found
    }

    fn scan_dir(&self, dir: &Path, depth: usize, max_depth: usize, found: &mut Vec<PathBuf>) {
        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };

        for entry in entries {
            if !entry.is_dir() || self.rules.is_ignored(&entry.name) {
                continue;
            }

            found.push(entry.path.clone());

            if depth < max_depth {
                self.scan_dir(&entry.path, depth + 1, max_depth, found);
            }
        }
    }

    /// Scans each existing common root (including the root itself) and
    /// merges the results, keeping the first occurrence of every path.
    pub fn scan_roots(&self, roots: &[PathBuf], max_depth: usize) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut merged = Vec::new();

        for root in roots {
            if !self.fs.is_dir(root) {
                continue;
            }
            for path in self.scan(root, max_depth, true) {
                if seen.insert(path.clone()) {
                    merged.push(path);
                }
            }
        }

        merged
    }
}

pub fn scan_directories(start: &Path, max_depth: usize, include_start: bool) -> Vec<PathBuf> {
    DirectoryScanner::new(OsFileSystem).scan(start, max_depth, include_start)
}

/// Home plus the conventional project folders inside it that exist.
pub fn common_start_paths() -> Vec<PathBuf> {
    let Some(home) = dirs::home_dir() else {
        return Vec::new();
    };

    let mut paths = vec![home.clone()];
    paths.extend(
        COMMON_PROJECT_DIRS
            .iter()
            .map(|name| home.join(name))
            .filter(|p| OsFileSystem.is_dir(p)),
    );
    paths
}

pub fn scan_common_roots(max_depth: usize) -> Vec<PathBuf> {
    DirectoryScanner::new(OsFileSystem).scan_roots(&common_start_paths(), max_depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{DirEntry, EntryKind};
    use std::collections::HashMap;
    use std::fs;
    use std::io;
    use tempfile::tempdir;

    #[test]
    fn test_excludes_hidden_and_ignored() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("project")).unwrap();
        fs::create_dir(root.path().join(".hidden")).unwrap();
        fs::create_dir(root.path().join("node_modules")).unwrap();
        fs::write(root.path().join("file.txt"), "x").unwrap();

        let results = scan_directories(root.path(), 1, false);

        assert_eq!(results, vec![root.path().join("project")]);
    }

    #[test]
    fn test_include_start_and_depth_zero() {
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join("level-1").join("level-2")).unwrap();

        let results = scan_directories(root.path(), 0, true);

        assert_eq!(
            results,
            vec![root.path().to_path_buf(), root.path().join("level-1")]
        );
    }

    #[test]
    fn test_depth_bounds_descent_not_emission() {
        let root = tempdir().unwrap();
        let deep = root.path().join("a").join("b").join("c").join("d");
        fs::create_dir_all(&deep).unwrap();

        let results = scan_directories(root.path(), 2, false);

        assert!(results.contains(&root.path().join("a")));
        assert!(results.contains(&root.path().join("a/b")));
        assert!(results.contains(&root.path().join("a/b/c")));
        assert!(!results.contains(&root.path().join("a/b/c/d")));
    }

    #[test]
    fn test_depth_first_order() {
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join("a").join("inner")).unwrap();

        let results = scan_directories(root.path(), 3, false);

        assert_eq!(
            results,
            vec![root.path().join("a"), root.path().join("a").join("inner")]
        );
    }

    #[test]
    fn test_missing_start_is_empty() {
        let root = tempdir().unwrap();
        assert!(scan_directories(&root.path().join("missing"), 3, false).is_empty());
    }

    #[test]
    fn test_ignored_dirs_are_not_descended() {
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join("dist").join("nested")).unwrap();
        fs::create_dir_all(root.path().join(".git").join("objects")).unwrap();

        assert!(scan_directories(root.path(), 5, false).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_dirs_are_skipped() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("real")).unwrap();
        std::os::unix::fs::symlink(root.path(), root.path().join("real").join("loop")).unwrap();

        let results = scan_directories(root.path(), 10, false);

        assert_eq!(results, vec![root.path().join("real")]);
    }

    /// In-memory tree; listing a path in `broken` fails.
    struct FakeFs {
        tree: HashMap<PathBuf, Vec<DirEntry>>,
        broken: Vec<PathBuf>,
    }

    impl FakeFs {
        fn new() -> Self {
            FakeFs {
                tree: HashMap::new(),
                broken: Vec::new(),
            }
        }

        fn dir(mut self, parent: &str, names: &[&str]) -> Self {
            let entries = names
                .iter()
                .map(|n| DirEntry {
                    name: n.to_string(),
                    path: Path::new(parent).join(n),
                    kind: EntryKind::Dir,
                })
                .collect();
            self.tree.insert(PathBuf::from(parent), entries);
            self
        }
    }

    impl FileSystem for FakeFs {
        fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
            if self.broken.iter().any(|b| b == dir) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            Ok(self.tree.get(dir).cloned().unwrap_or_default())
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.tree.contains_key(path)
        }
    }

    #[test]
    fn test_unreadable_sibling_does_not_abort() {
        let mut fake = FakeFs::new()
            .dir("/r", &["a", "locked", "b"])
            .dir("/r/a", &["a1"])
            .dir("/r/b", &["b1"]);
        fake.broken.push(PathBuf::from("/r/locked"));

        let results = DirectoryScanner::new(fake).scan(Path::new("/r"), 3, false);

        let expected: Vec<PathBuf> = ["/r/a", "/r/a/a1", "/r/locked", "/r/b", "/r/b/b1"]
            .iter()
            .map(PathBuf::from)
            .collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_scan_roots_dedups_overlap() {
        let fake = FakeFs::new()
            .dir("/home", &["projects"])
            .dir("/home/projects", &["app"]);

        let roots = vec![
            PathBuf::from("/home"),
            PathBuf::from("/home/projects"),
            PathBuf::from("/nowhere"),
        ];
        let results = DirectoryScanner::new(fake).scan_roots(&roots, 3);

        let expected: Vec<PathBuf> = ["/home", "/home/projects", "/home/projects/app"]
            .iter()
            .map(PathBuf::from)
            .collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_custom_rules() {
        let fake = FakeFs::new().dir("/r", &["keep", "tmp-old", ".dot"]);

        let rules = IgnoreRules::repository_scan().with_patterns(&["tmp*".to_string()]);
        let results = DirectoryScanner::new(fake)
            .with_rules(rules)
            .scan(Path::new("/r"), 0, false);

        assert_eq!(
            results,
            vec![PathBuf::from("/r/keep"), PathBuf::from("/r/.dot")]
        );
    }

    #[test]
    fn test_common_roots_have_no_duplicates() {
        let paths = scan_common_roots(0);
        let unique: HashSet<&PathBuf> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }
}
