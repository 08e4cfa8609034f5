use colored::*;
use dev_diary::diary::DiaryFile;
use dev_diary::error::Result;
use dev_diary::fuzzy::{highlight, sort_by_fuzzy_score, FuzzyMatch};
use dev_diary::output::{self, EntryOutput, ListingOutput, OutputFormat};
use dev_diary::repos::GitRepo;
use std::path::PathBuf;

/// Something a picker can list and filter.
pub trait Candidate: Sync {
    /// Text the query is matched against.
    fn key(&self) -> String;

    fn entry(&self) -> EntryOutput;

    /// One text line, given the key with matches already highlighted.
    fn line(&self, key: &str, color: bool) -> String;
}

impl Candidate for PathBuf {
    fn key(&self) -> String {
        self.to_string_lossy().into_owned()
    }

    fn entry(&self) -> EntryOutput {
        EntryOutput {
            path: self.key(),
            ..EntryOutput::default()
        }
    }

    fn line(&self, key: &str, _color: bool) -> String {
        key.to_string()
    }
}

impl Candidate for GitRepo {
    fn key(&self) -> String {
        self.name.clone()
    }

    fn entry(&self) -> EntryOutput {
        EntryOutput {
            path: self.path.to_string_lossy().into_owned(),
            name: Some(self.name.clone()),
            ..EntryOutput::default()
        }
    }

    fn line(&self, key: &str, color: bool) -> String {
        let path = self.path.display().to_string();
        let path = if color { path.dimmed().to_string() } else { path };
        format!("{}  {}", key, path)
    }
}

impl Candidate for DiaryFile {
    /// File name plus display date, so "Jan" or "Thu" find entries too.
    fn key(&self) -> String {
        format!("{} {}", self.filename, self.display_date)
    }

    fn entry(&self) -> EntryOutput {
        EntryOutput {
            path: self.path.to_string_lossy().into_owned(),
            name: Some(self.filename.clone()),
            date: Some(self.date.clone()),
            display_date: Some(self.display_date.clone()),
            ..EntryOutput::default()
        }
    }

    fn line(&self, key: &str, _color: bool) -> String {
        key.to_string()
    }
}

/// Items matching `query` best first, or all items in order without one.
pub fn rank<'a, T: Candidate>(items: &'a [T], query: Option<&str>) -> Vec<(&'a T, Option<FuzzyMatch>)> {
    match query.filter(|q| !q.is_empty()) {
        Some(q) => sort_by_fuzzy_score(items, q, |item: &T| item.key())
            .into_iter()
            .map(|r| (r.item, Some(r.result)))
            .collect(),
        None => items.iter().map(|item| (item, None)).collect(),
    }
}

pub struct Listing<'a, T> {
    pub kind: &'static str,
    pub root: String,
    pub query: Option<&'a str>,
    pub items: &'a [T],
    pub limit: usize,
    pub format: OutputFormat,
    pub color: bool,
}

impl<'a, T: Candidate> Listing<'a, T> {
    /// Applies the query (if any), caps the result and prints it.
    pub fn print(self) -> Result<()> {
        let query = self.query.filter(|q| !q.is_empty());

        let mut rows = rank(self.items, query);

        let total = rows.len();
        rows.truncate(self.limit);

        match self.format {
            OutputFormat::Text => {
                if total == 0 {
                    println!("No {} found", self.kind);
                }
                for (item, result) in &rows {
                    let indices = result.as_ref().map(|r| r.indices.as_slice()).unwrap_or(&[]);
                    let key = highlight(&item.key(), indices, self.color);
                    println!("{}", item.line(&key, self.color));
                }
                if total > rows.len() {
                    let more = format!("... {} more", total - rows.len());
                    if self.color {
                        println!("{}", more.dimmed());
                    } else {
                        println!("{}", more);
                    }
                }
                Ok(())
            }
            format => {
                let entries = rows
                    .into_iter()
                    .map(|(item, result)| {
                        let mut entry = item.entry();
                        if let Some(r) = result {
                            entry.score = Some(r.score);
                            entry.indices = Some(r.indices);
                        }
                        entry
                    })
                    .collect();

                let data = ListingOutput {
                    kind: self.kind.to_string(),
                    root: self.root,
                    query: query.map(String::from),
                    total,
                    entries,
                };
                output::print_listing(&data, format)
            }
        }
    }
}
