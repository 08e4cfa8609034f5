mod cli;
mod config_cmd;
mod diaries_cmd;
mod dirs_cmd;
mod listing;
mod log_cmd;
mod repos_cmd;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_jobs(jobs: usize) {
    let threads = if jobs == 0 { num_cpus::get() } else { jobs };
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        tracing::debug!(error = %e, "rayon pool already initialised");
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    init_jobs(cli.jobs);

    let result = match cli.command {
        Commands::Dirs(args) => dirs_cmd::run(args),
        Commands::Repos(args) => repos_cmd::run(args),
        Commands::Diaries(args) => diaries_cmd::run(args),
        Commands::Log(args) => log_cmd::run(args),
        Commands::Config(args) => config_cmd::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
