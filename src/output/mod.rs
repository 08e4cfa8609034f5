pub mod json;
pub mod xml;

use crate::error::Error;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Xml,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

impl OutputFormat {
    pub fn parse_opt(format: Option<&str>) -> Result<Self, Error> {
        format.map_or(Ok(OutputFormat::Text), str::parse)
    }
}

/// One row of a picker listing.
#[derive(Serialize, Debug, Clone, Default)]
pub struct EntryOutput {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indices: Option<Vec<usize>>,
}

#[derive(Serialize, Debug)]
pub struct ListingOutput {
    pub kind: String,
    pub root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub total: usize,
    pub entries: Vec<EntryOutput>,
}

pub fn print_listing(data: &ListingOutput, format: OutputFormat) -> Result<(), Error> {
    match format {
        OutputFormat::Json => json::output_listing(data),
        OutputFormat::Xml => xml::output_listing(data),
        OutputFormat::Text => Ok(()),
    }
}
