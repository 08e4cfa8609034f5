use crate::cli::{ConfigArgs, ConfigCommand};
use dev_diary::config::{config_path, load_settings, Config};
use dev_diary::error::Result;

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command.unwrap_or(ConfigCommand::Show) {
        ConfigCommand::Show => show(),
        ConfigCommand::Path => {
            println!("{}", config_path()?.display());
            Ok(())
        }
        ConfigCommand::Set {
            directory,
            output,
            days,
            depth,
            ignore,
        } => set(Config {
            directory,
            output_dir: output,
            days,
            depth,
            ignore: (!ignore.is_empty()).then_some(ignore),
        }),
    }
}

fn show() -> Result<()> {
    let settings = load_settings(Config::default());

    println!("directory  = {}", settings.directory.display());
    println!("output_dir = {}", settings.output_dir.display());
    println!("days       = {}", settings.days);
    println!("depth      = {}", settings.depth);
    if !settings.ignore.is_empty() {
        println!("ignore     = {}", settings.ignore.join(", "));
    }

    Ok(())
}

fn set(changes: Config) -> Result<()> {
    let path = config_path()?;
    let mut config = Config::load_from(&path);
    config.merge(changes);
    config.save_to(&path)?;

    println!("Saved preferences to {}", path.display());
    Ok(())
}
