use crate::error::GitError;
use crate::repos::GitRepo;
use serde::Serialize;
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

// Unit separator; cannot appear in a commit subject line.
const FIELD_SEP: char = '\x1f';
const LOG_FORMAT: &str = "--format=%H%x1f%s%x1f%an%x1f%ai";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub hash: String,
    pub message: String,
    pub author: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommitWithDiff {
    #[serde(flatten)]
    pub commit: Commit,
    pub diff: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepoActivity {
    pub repo: GitRepo,
    pub commits: Vec<CommitWithDiff>,
}

fn run_git(repo: &Path, args: &[&str]) -> Result<String, GitError> {
    debug!(repo = %repo.display(), ?args, "running git");

    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .map_err(|e| {
            // Spawning also fails when the working directory is gone.
            if e.kind() == io::ErrorKind::NotFound && repo.is_dir() {
                GitError::NotInstalled
            } else {
                GitError::CommandFailed(e.to_string())
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.contains("not a git repository") {
            return Err(GitError::NotARepo);
        }
        // A repository without any commit has nothing to log.
        if stderr.contains("does not have any commits") {
            return Ok(String::new());
        }
        return Err(GitError::CommandFailed(stderr.trim().to_string()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn parse_log(stdout: &str) -> Vec<Commit> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut parts = line.splitn(4, FIELD_SEP);
            Some(Commit {
                hash: parts.next()?.to_string(),
                message: parts.next()?.to_string(),
                author: parts.next()?.to_string(),
                date: parts.next()?.to_string(),
            })
        })
        .collect()
}

/// Commits reachable from HEAD made within the last `days` days, newest first.
pub fn commits_since(repo: &Path, days: u32) -> Result<Vec<Commit>, GitError> {
    let since = format!("--since={} days ago", days);
    let stdout = run_git(repo, &["log", &since, LOG_FORMAT])?;
    Ok(parse_log(&stdout))
}

pub fn commit_diff(repo: &Path, hash: &str) -> Result<String, GitError> {
    run_git(repo, &["show", "--format=", hash])
}

pub fn repo_activity(repo: &GitRepo, days: u32) -> Result<RepoActivity, GitError> {
    let commits = commits_since(&repo.path, days)?
        .into_iter()
        .map(|commit| {
            let diff = commit_diff(&repo.path, &commit.hash)?;
            Ok(CommitWithDiff { commit, diff })
        })
        .collect::<Result<Vec<_>, GitError>>()?;

    Ok(RepoActivity {
        repo: repo.clone(),
        commits,
    })
}

/// Gathers activity for each repository in turn, reporting
/// `(current, total, name)` before each one. Repositories without commits in
/// the window, or whose history cannot be read, are left out. A missing git
/// binary stops the whole run.
pub fn collect_activity<P>(
    repos: &[GitRepo],
    days: u32,
    mut progress: P,
) -> Result<Vec<RepoActivity>, GitError>
where
    P: FnMut(usize, usize, &str),
{
    let total = repos.len();
    let mut activity = Vec::new();

    for (i, repo) in repos.iter().enumerate() {
        progress(i + 1, total, &repo.name);

        match repo_activity(repo, days) {
            Ok(data) if !data.commits.is_empty() => activity.push(data),
            Ok(_) => {}
            Err(GitError::NotInstalled) => return Err(GitError::NotInstalled),
            Err(e) => warn!(repo = %repo.path.display(), error = %e, "skipping repository"),
        }
    }

    Ok(activity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Command as StdCommand;
    use tempfile::tempdir;

    fn git(dir: &Path, args: &[&str]) -> String {
        let output = StdCommand::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap();
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    fn init_repo(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        git(dir, &["init", "-q"]);
        git(dir, &["config", "user.email", "test@example.com"]);
        git(dir, &["config", "user.name", "Test User"]);
        git(dir, &["config", "commit.gpgsign", "false"]);
    }

    fn commit_file(dir: &Path, name: &str, content: &str, message: &str) -> String {
        fs::write(dir.join(name), content).unwrap();
        git(dir, &["add", "."]);
        git(dir, &["commit", "-q", "-m", message]);
        git(dir, &["rev-parse", "HEAD"])
    }

    #[test]
    fn test_parse_log() {
        let stdout = "abc\x1ffix: a | b\x1fTest User\x1f2026-01-01 10:00:00 +0000\n\nbroken line\n";
        let commits = parse_log(stdout);
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].hash, "abc");
        assert_eq!(commits[0].message, "fix: a | b");
        assert_eq!(commits[0].author, "Test User");
    }

    #[test]
    fn test_commits_and_diff() {
        let dir = tempdir().unwrap();
        let repo = dir.path().join("repo");
        init_repo(&repo);
        let hash = commit_file(&repo, "file.txt", "hello world\n", "Initial commit");

        let commits = commits_since(&repo, 1).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "Initial commit");
        assert_eq!(commits[0].hash, hash);

        let diff = commit_diff(&repo, &hash).unwrap();
        assert!(diff.contains("file.txt"));
        assert!(diff.contains("hello world"));
    }

    #[test]
    fn test_not_a_repo() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            commits_since(dir.path(), 1),
            Err(GitError::NotARepo)
        ));
    }

    #[test]
    fn test_collect_activity_reports_progress_and_drops_empty() {
        let dir = tempdir().unwrap();
        let with_commit = dir.path().join("repo-with-commit");
        let without_commit = dir.path().join("repo-no-commit");
        init_repo(&with_commit);
        commit_file(&with_commit, "a.txt", "a\n", "Add a");
        init_repo(&without_commit);

        let repos = vec![
            GitRepo::new(with_commit.clone()),
            GitRepo::new(without_commit),
        ];
        let mut calls = Vec::new();
        let activity = collect_activity(&repos, 1, |current, total, name| {
            calls.push((current, total, name.to_string()));
        })
        .unwrap();

        assert_eq!(
            calls,
            vec![
                (1, 2, "repo-with-commit".to_string()),
                (2, 2, "repo-no-commit".to_string()),
            ]
        );
        assert_eq!(activity.len(), 1);
        assert_eq!(activity[0].repo.path, with_commit);
        assert_eq!(activity[0].commits.len(), 1);
        assert!(activity[0].commits[0].diff.contains("a.txt"));
    }

    #[test]
    fn test_collect_activity_skips_vanished_repo() {
        let dir = tempdir().unwrap();
        let live = dir.path().join("live");
        init_repo(&live);
        commit_file(&live, "a.txt", "a\n", "Add a");

        let repos = vec![
            GitRepo::new(dir.path().join("gone")),
            GitRepo::new(live.clone()),
        ];
        let activity = collect_activity(&repos, 1, |_, _, _| {}).unwrap();

        assert_eq!(activity.len(), 1);
        assert_eq!(activity[0].repo.path, live);
    }

    #[test]
    fn test_missing_working_directory_is_not_missing_git() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            commits_since(&dir.path().join("gone"), 1),
            Err(GitError::CommandFailed(_))
        ));
    }
}
