//! Plain markdown digest of recent commits, written as a dev log.

use crate::git::RepoActivity;
use chrono::NaiveDate;
use std::fmt::Write;

pub fn render(activity: &[RepoActivity], days: u32, today: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Dev Log - {}", today.format("%A, %B %-d, %Y"));
    out.push('\n');

    if activity.is_empty() {
        out.push_str("No commits found for the specified time period.\n");
        return out;
    }

    let commit_count: usize = activity.iter().map(|a| a.commits.len()).sum();
    let window = if days == 1 {
        "the last day".to_string()
    } else {
        format!("the last {} days", days)
    };
    let _ = writeln!(
        out,
        "{} commit{} across {} repositor{} in {}.",
        commit_count,
        if commit_count == 1 { "" } else { "s" },
        activity.len(),
        if activity.len() == 1 { "y" } else { "ies" },
        window
    );

    for repo in activity {
        let _ = write!(out, "\n## {}\n\n", repo.repo.name);
        for c in &repo.commits {
            let short = c.commit.hash.get(..7).unwrap_or(&c.commit.hash);
            let _ = writeln!(out, "- {} (`{}`, {})", c.commit.message, short, c.commit.author);
        }
    }

    out
}
