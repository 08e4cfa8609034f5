pub mod config;
pub mod diary;
pub mod digest;
pub mod directory;
pub mod error;
pub mod fs;
pub mod fuzzy;
pub mod git;
pub mod ignore;
pub mod output;
pub mod repos;

pub use diary::{read_entry, scan_diary_files, scan_diary_files_in, write_entry, DiaryFile, DiaryKind};
pub use directory::{common_start_paths, scan_common_roots, scan_directories, DirectoryScanner};
pub use error::{Error, GitError, Result};
pub use fuzzy::{fuzzy_match, sort_by_fuzzy_score, FuzzyMatch, Ranked};
pub use ignore::IgnoreRules;
pub use output::OutputFormat;
pub use repos::{scan_for_repos, Diagnostics, GitRepo, RepoScanner, TracingDiagnostics};
