use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dev-diary")]
#[command(version, about = "Find git repositories and turn recent commits into dev logs", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'j',
        long,
        global = true,
        default_value_t = 0,
        help = "Number of parallel jobs (0 = auto)"
    )]
    pub jobs: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List candidate directories for the picker")]
    Dirs(DirsArgs),

    #[command(about = "Find git repositories below a directory")]
    Repos(ReposArgs),

    #[command(about = "Browse generated dev-diary and dev-log files")]
    Diaries(DiariesArgs),

    #[command(about = "Collect recent commits into a dev log")]
    Log(LogArgs),

    #[command(about = "Show or change saved preferences")]
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct DirsArgs {
    #[arg(help = "Directory to scan (default: home directory)")]
    pub path: Option<PathBuf>,

    #[arg(short, long, default_value_t = 3, help = "Maximum depth")]
    pub depth: usize,

    #[arg(long, help = "Include the scanned directory itself")]
    pub include_root: bool,

    #[arg(
        long,
        conflicts_with = "path",
        help = "Scan home and the usual project folders"
    )]
    pub common: bool,

    #[arg(short, long, help = "Fuzzy filter")]
    pub query: Option<String>,

    #[arg(short, long, default_value_t = dev_diary::fuzzy::MAX_PICKER_RESULTS, help = "Maximum results to show")]
    pub limit: usize,

    #[arg(long, help = "Output format: text, json, xml (default: text)")]
    pub format: Option<String>,

    #[arg(long, help = "Disable colors")]
    pub no_color: bool,
}

#[derive(Parser)]
pub struct ReposArgs {
    #[arg(help = "Directory to scan (default: saved directory or current directory)")]
    pub path: Option<PathBuf>,

    #[arg(short, long, help = "Maximum depth (default: 3)")]
    pub depth: Option<usize>,

    #[arg(short, long, help = "Fuzzy filter on repository names")]
    pub query: Option<String>,

    #[arg(long, help = "Output format: text, json, xml (default: text)")]
    pub format: Option<String>,

    #[arg(long, help = "Disable colors")]
    pub no_color: bool,
}

#[derive(Parser)]
pub struct DiariesArgs {
    #[arg(short, long, help = "Output directory (default: ~/Documents/dev-diary)")]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Fuzzy filter on file names and dates")]
    pub query: Option<String>,

    #[arg(
        short,
        long,
        conflicts_with = "format",
        help = "Print the newest (or best matching) file instead of listing"
    )]
    pub show: bool,

    #[arg(short, long, default_value_t = dev_diary::fuzzy::MAX_PICKER_RESULTS, help = "Maximum results to show")]
    pub limit: usize,

    #[arg(long, help = "Output format: text, json, xml (default: text)")]
    pub format: Option<String>,

    #[arg(long, help = "Disable colors")]
    pub no_color: bool,
}

#[derive(Parser)]
pub struct LogArgs {
    #[arg(help = "Directory to scan for repositories")]
    pub path: Option<PathBuf>,

    #[arg(long, help = "Days of history to include (default: 1)")]
    pub days: Option<u32>,

    #[arg(short, long, help = "Maximum depth (default: 3)")]
    pub depth: Option<usize>,

    #[arg(short, long, help = "Write a dev-log file instead of printing")]
    pub write: bool,

    #[arg(short, long, help = "Output directory for --write")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the resolved preferences")]
    Show,

    #[command(about = "Print the config file location")]
    Path,

    #[command(about = "Save preferences")]
    Set {
        #[arg(long, help = "Default directory to scan")]
        directory: Option<PathBuf>,

        #[arg(long, help = "Where generated files go")]
        output: Option<PathBuf>,

        #[arg(long, help = "Days of history to include")]
        days: Option<u32>,

        #[arg(long, help = "Maximum scan depth")]
        depth: Option<usize>,

        #[arg(long, help = "Extra directory name pattern to ignore (repeatable)")]
        ignore: Vec<String>,
    },
}
