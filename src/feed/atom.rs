use crate::domain::{ContentKind, Entry};
use crate::feed::{FEED_AUTHOR_EMAIL, FEED_AUTHOR_NAME, FEED_SITE, FEED_TITLE};
use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

const ATOM_XMLNS: &str = "http://www.w3.org/2005/Atom";

/// Serializes the feed envelope and the given entry sequence as an Atom
/// document. `updated` is the wall-clock timestamp of this response.
pub fn render_feed(entries: &[Entry], updated: &str) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .context("Failed to write XML declaration")?;

    let mut feed = BytesStart::new("feed");
    feed.push_attribute(("xmlns", ATOM_XMLNS));
    writer
        .write_event(Event::Start(feed))
        .context("Failed to open feed element")?;

    write_text_element(&mut writer, "title", FEED_TITLE)?;

    let mut self_link = BytesStart::new("link");
    self_link.push_attribute(("href", FEED_SITE));
    self_link.push_attribute(("rel", "self"));
    writer
        .write_event(Event::Empty(self_link))
        .context("Failed to write self link")?;

    let mut alternate_link = BytesStart::new("link");
    alternate_link.push_attribute(("href", FEED_SITE));
    writer
        .write_event(Event::Empty(alternate_link))
        .context("Failed to write alternate link")?;

    write_text_element(&mut writer, "updated", updated)?;
    write_text_element(&mut writer, "id", FEED_SITE)?;

    writer
        .write_event(Event::Start(BytesStart::new("author")))
        .context("Failed to open author element")?;
    write_text_element(&mut writer, "name", FEED_AUTHOR_NAME)?;
    write_text_element(&mut writer, "email", FEED_AUTHOR_EMAIL)?;
    writer
        .write_event(Event::End(BytesEnd::new("author")))
        .context("Failed to close author element")?;

    for entry in entries {
        write_entry(&mut writer, entry)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("feed")))
        .context("Failed to close feed element")?;

    let result = writer.into_inner().into_inner();
    String::from_utf8(result).context("Generated feed contains invalid UTF-8")
}

fn write_entry(writer: &mut Writer<Cursor<Vec<u8>>>, entry: &Entry) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("entry")))
        .context("Failed to open entry element")?;

    write_text_element(writer, "title", &entry.title)?;

    let mut link = BytesStart::new("link");
    link.push_attribute(("href", entry.link.as_str()));
    writer
        .write_event(Event::Empty(link))
        .context("Failed to write entry link")?;

    write_text_element(writer, "updated", &entry.updated)?;
    write_text_element(writer, "id", &entry.id)?;

    let mut content = BytesStart::new("content");
    if entry.kind == ContentKind::Html {
        content.push_attribute(("type", "html"));
    }
    writer
        .write_event(Event::Start(content))
        .context("Failed to open content element")?;
    writer
        .write_event(Event::Text(BytesText::new(&entry.content)))
        .context("Failed to write content text")?;
    writer
        .write_event(Event::End(BytesEnd::new("content")))
        .context("Failed to close content element")?;

    writer
        .write_event(Event::End(BytesEnd::new("entry")))
        .context("Failed to close entry element")?;

    Ok(())
}

fn write_text_element(writer: &mut Writer<Cursor<Vec<u8>>>, name: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .with_context(|| format!("Failed to open {} element", name))?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .with_context(|| format!("Failed to write {} text", name))?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .with_context(|| format!("Failed to close {} element", name))?;

    Ok(())
}
