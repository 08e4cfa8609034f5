use super::{EntryOutput, ListingOutput};
use crate::error::Error;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

pub fn render_listing(data: &ListingOutput) -> Result<String, Error> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let listing = BytesStart::new("listing");
    writer.write_event(Event::Start(listing.borrow()))?;

    write_element(&mut writer, "kind", &data.kind)?;
    write_element(&mut writer, "root", &data.root)?;
    if let Some(ref query) = data.query {
        write_element(&mut writer, "query", query)?;
    }
    write_element(&mut writer, "total", &data.total.to_string())?;

    let entries = BytesStart::new("entries");
    writer.write_event(Event::Start(entries.borrow()))?;

    for entry in &data.entries {
        write_entry_element(&mut writer, entry)?;
    }

    writer.write_event(Event::End(BytesEnd::new("entries")))?;
    writer.write_event(Event::End(BytesEnd::new("listing")))?;

    let result = writer.into_inner().into_inner();
    Ok(String::from_utf8_lossy(&result).into_owned())
}

pub fn output_listing(data: &ListingOutput) -> Result<(), Error> {
    println!("{}", render_listing(data)?);
    Ok(())
}

fn write_entry_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    entry: &EntryOutput,
) -> Result<(), Error> {
    let mut elem = BytesStart::new("entry");
    elem.push_attribute(("path", entry.path.as_str()));

    if let Some(ref name) = entry.name {
        elem.push_attribute(("name", name.as_str()));
    }
    if let Some(ref date) = entry.date {
        elem.push_attribute(("date", date.as_str()));
    }
    if let Some(ref display_date) = entry.display_date {
        elem.push_attribute(("display_date", display_date.as_str()));
    }
    if let Some(score) = entry.score {
        elem.push_attribute(("score", score.to_string().as_str()));
    }
    if let Some(ref indices) = entry.indices {
        let joined = indices
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(",");
        elem.push_attribute(("indices", joined.as_str()));
    }

    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    content: &str,
) -> Result<(), Error> {
    let elem = BytesStart::new(name);
    writer.write_event(Event::Start(elem.borrow()))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
