use crate::cli::LogArgs;
use chrono::Local;
use dev_diary::config::{load_settings, Config};
use dev_diary::diary::{write_entry, DiaryKind};
use dev_diary::digest;
use dev_diary::error::Result;
use dev_diary::fs::OsFileSystem;
use dev_diary::git::collect_activity;
use dev_diary::ignore::IgnoreRules;
use dev_diary::repos::{RepoScanner, TracingDiagnostics};

pub fn run(args: LogArgs) -> Result<()> {
    let settings = load_settings(Config {
        directory: args.path,
        output_dir: args.output,
        days: args.days,
        depth: args.depth,
        ..Config::default()
    });

    let repos = RepoScanner::new(OsFileSystem, TracingDiagnostics)
        .with_rules(IgnoreRules::repository_scan().with_patterns(&settings.ignore))
        .scan(&settings.directory, settings.depth);

    eprintln!(
        "Found {} repositories in {}",
        repos.len(),
        settings.directory.display()
    );

    let activity = collect_activity(&repos, settings.days, |current, total, name| {
        eprintln!("[{}/{}] {}", current, total, name);
    })?;

    let today = Local::now().date_naive();
    let text = digest::render(&activity, settings.days, today);

    if args.write {
        let path = write_entry(&text, &settings.output_dir, DiaryKind::Log, today)?;
        println!("Wrote {}", path.display());
    } else {
        print!("{}", text);
    }

    Ok(())
}
