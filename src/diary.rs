//! Generated summary files: the naming convention, the writer and the
//! scanner used by the browser.

use crate::error::Result;
use crate::fs::{EntryKind, FileSystem, OsFileSystem};
use chrono::NaiveDate;
use glob::Pattern;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%a, %b %-d, %Y";

lazy_static! {
    static ref DIARY_FILENAME: Regex =
        Regex::new(r"dev-(?:diary|log)-(\d{4}-\d{2}-\d{2})\.md").expect("valid diary filename regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiaryKind {
    Diary,
    Log,
}

impl DiaryKind {
    pub const ALL: [DiaryKind; 2] = [DiaryKind::Diary, DiaryKind::Log];

    pub fn prefix(self) -> &'static str {
        match self {
            DiaryKind::Diary => "dev-diary",
            DiaryKind::Log => "dev-log",
        }
    }

    pub fn file_name(self, date: NaiveDate) -> String {
        format!("{}-{}.md", self.prefix(), date.format(DATE_FORMAT))
    }

    fn glob(self) -> Pattern {
        Pattern::new(&format!("{}-*.md", self.prefix())).expect("valid diary glob")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiaryFile {
    pub path: PathBuf,
    pub filename: String,
    pub kind: DiaryKind,
    pub date: String,
    pub display_date: String,
}

impl DiaryFile {
    fn parse(dir: &Path, filename: &str, kind: DiaryKind) -> Option<Self> {
        let captures = DIARY_FILENAME.captures(filename)?;
        let date_str = captures.get(1)?.as_str();
        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).ok()?;

        Some(DiaryFile {
            path: dir.join(filename),
            filename: filename.to_string(),
            kind,
            date: date_str.to_string(),
            display_date: format_display_date(date),
        })
    }
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Lists generated files in `output_dir`, newest first.
///
/// A missing or unreadable directory yields an empty list.
pub fn scan_diary_files(output_dir: &Path) -> Vec<DiaryFile> {
    scan_diary_files_in(&OsFileSystem, output_dir)
}

pub fn scan_diary_files_in<F: FileSystem>(fs: &F, output_dir: &Path) -> Vec<DiaryFile> {
    let entries = match fs.read_dir(output_dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %output_dir.display(), error = %e, "no diary files");
            return Vec::new();
        }
    };

    let globs: Vec<(DiaryKind, Pattern)> = DiaryKind::ALL.iter().map(|&k| (k, k.glob())).collect();
    let mut files = Vec::new();

    for entry in entries {
        if entry.kind != EntryKind::File {
            continue;
        }

        let Some(kind) = globs
            .iter()
            .find(|(_, glob)| glob.matches(&entry.name))
            .map(|(kind, _)| *kind)
        else {
            continue;
        };

        if let Some(file) = DiaryFile::parse(output_dir, &entry.name, kind) {
            files.push(file);
        }
    }

    files.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.filename.cmp(&b.filename)));
    files
}

pub fn read_entry(file: &DiaryFile) -> Result<String> {
    Ok(fs::read_to_string(&file.path)?)
}

/// Writes `content` as the `kind` file for `date`, replacing any file
/// already written that day.
pub fn write_entry(content: &str, output_dir: &Path, kind: DiaryKind, date: NaiveDate) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(kind.file_name(date));
    fs::write(&path, content)?;
    Ok(path)
}
