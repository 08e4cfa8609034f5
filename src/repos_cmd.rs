use crate::cli::ReposArgs;
use crate::listing::Listing;
use dev_diary::config::{load_settings, Config};
use dev_diary::error::Result;
use dev_diary::fs::OsFileSystem;
use dev_diary::ignore::IgnoreRules;
use dev_diary::output::OutputFormat;
use dev_diary::repos::{RepoScanner, TracingDiagnostics};

pub fn run(args: ReposArgs) -> Result<()> {
    let format = OutputFormat::parse_opt(args.format.as_deref())?;
    let settings = load_settings(Config {
        directory: args.path,
        depth: args.depth,
        ..Config::default()
    });

    let repos = RepoScanner::new(OsFileSystem, TracingDiagnostics)
        .with_rules(IgnoreRules::repository_scan().with_patterns(&settings.ignore))
        .scan(&settings.directory, settings.depth);

    Listing {
        kind: "repositories",
        root: settings.directory.display().to_string(),
        query: args.query.as_deref(),
        items: &repos,
        limit: usize::MAX,
        format,
        color: !args.no_color,
    }
    .print()
}
