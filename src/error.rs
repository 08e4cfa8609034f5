use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("could not serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("could not render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not render XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid format: {0}. Use text, json, or xml")]
    InvalidFormat(String),

    #[error("could not determine home directory")]
    NoHomeDir,
}

#[derive(Error, Debug)]
pub enum GitError {
    #[error("git is not installed")]
    NotInstalled,

    #[error("not a git repository")]
    NotARepo,

    #[error("git command failed: {0}")]
    CommandFailed(String),
}
