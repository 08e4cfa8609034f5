use crate::cli::DiariesArgs;
use crate::listing::{rank, Listing};
use dev_diary::config::{load_settings, Config};
use dev_diary::diary::{read_entry, scan_diary_files};
use dev_diary::error::Result;
use dev_diary::output::OutputFormat;

pub fn run(args: DiariesArgs) -> Result<()> {
    let format = OutputFormat::parse_opt(args.format.as_deref())?;
    let settings = load_settings(Config {
        output_dir: args.output,
        ..Config::default()
    });

    let files = scan_diary_files(&settings.output_dir);

    if args.show {
        match rank(&files, args.query.as_deref()).first() {
            Some((file, _)) => print!("{}", read_entry(file)?),
            None => println!("No diary files found"),
        }
        return Ok(());
    }

    Listing {
        kind: "diary files",
        root: settings.output_dir.display().to_string(),
        query: args.query.as_deref(),
        items: &files,
        limit: args.limit,
        format,
        color: !args.no_color,
    }
    .print()
}
