use super::ListingOutput;
use crate::error::Error;

pub fn render_listing(data: &ListingOutput) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(data)?)
}

pub fn output_listing(data: &ListingOutput) -> Result<(), Error> {
    println!("{}", render_listing(data)?);
    Ok(())
}
