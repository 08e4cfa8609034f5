use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const ENV_OUTPUT: &str = "DAILY_SUMMARY_OUTPUT";
pub const ENV_DEPTH: &str = "DAILY_SUMMARY_DEPTH";
pub const ENV_DAYS: &str = "DAILY_SUMMARY_DAYS";

const DEFAULT_DEPTH: usize = 3;
const DEFAULT_DAYS: u32 = 1;

/// One layer of user preferences. Unset fields defer to earlier layers.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,
}

impl Config {
    pub fn merge(&mut self, other: Config) {
        if other.directory.is_some() {
            self.directory = other.directory;
        }
        if other.output_dir.is_some() {
            self.output_dir = other.output_dir;
        }
        if other.days.is_some() {
            self.days = other.days;
        }
        if other.depth.is_some() {
            self.depth = other.depth;
        }
        if other.ignore.is_some() {
            self.ignore = other.ignore;
        }
    }

    /// Reads a config file. A missing file is an empty config; a malformed
    /// one is logged and treated as empty.
    pub fn load_from(path: &Path) -> Config {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Config::default(),
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Config::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Overrides read from `DAILY_SUMMARY_*` variables.
    pub fn from_env<F>(var: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            output_dir: var(ENV_OUTPUT).filter(|v| !v.is_empty()).map(PathBuf::from),
            depth: parse_env(ENV_DEPTH, var(ENV_DEPTH)),
            days: parse_env(ENV_DAYS, var(ENV_DAYS)),
            ..Config::default()
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: Option<String>) -> Option<T> {
    let value = value?;
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(var = name, value = %value, "ignoring non-numeric environment value");
            None
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join(".config").join("dev-diary").join("config.toml"))
}

/// Preferences with every field filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub directory: PathBuf,
    pub output_dir: PathBuf,
    pub days: u32,
    pub depth: usize,
    pub ignore: Vec<String>,
}

impl Settings {
    pub fn resolve(config: Config) -> Settings {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

        Settings {
            directory: config
                .directory
                .or_else(|| std::env::current_dir().ok())
                .unwrap_or_else(|| PathBuf::from(".")),
            output_dir: config
                .output_dir
                .unwrap_or_else(|| home.join("Documents").join("dev-diary")),
            days: config.days.unwrap_or(DEFAULT_DAYS),
            depth: config.depth.unwrap_or(DEFAULT_DEPTH),
            ignore: config.ignore.unwrap_or_default(),
        }
    }
}

/// Defaults, then the config file, then the environment, then `overrides`
/// (usually built from command-line flags).
pub fn load_settings(overrides: Config) -> Settings {
    let mut config = match config_path() {
        Ok(path) => Config::load_from(&path),
        Err(_) => Config::default(),
    };
    config.merge(Config::from_env(|name| std::env::var(name).ok()));
    config.merge(overrides);
    Settings::resolve(config)
}
