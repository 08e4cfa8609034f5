use crate::cli::DirsArgs;
use crate::listing::Listing;
use dev_diary::config::{load_settings, Config};
use dev_diary::directory::{common_start_paths, DirectoryScanner};
use dev_diary::error::{Error, Result};
use dev_diary::fs::OsFileSystem;
use dev_diary::ignore::IgnoreRules;
use dev_diary::output::OutputFormat;

pub fn run(args: DirsArgs) -> Result<()> {
    let format = OutputFormat::parse_opt(args.format.as_deref())?;
    let settings = load_settings(Config::default());

    let scanner = DirectoryScanner::new(OsFileSystem)
        .with_rules(IgnoreRules::directory_picker().with_patterns(&settings.ignore));

    let (root, paths) = if args.common {
        let roots = common_start_paths();
        let label = roots
            .first()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        (label, scanner.scan_roots(&roots, args.depth))
    } else {
        let start = match args.path {
            Some(path) => path,
            None => dirs::home_dir().ok_or(Error::NoHomeDir)?,
        };
        let paths = scanner.scan(&start, args.depth, args.include_root);
        (start.display().to_string(), paths)
    };

    Listing {
        kind: "directories",
        root,
        query: args.query.as_deref(),
        items: &paths,
        limit: args.limit,
        format,
        color: !args.no_color,
    }
    .print()
}
