use crate::domain::{ContentKind, Entry, EntrySnapshot};
use crate::parser::markup::{render_end_tag, render_start_tag, strip_tags};
use chrono::{Local, SecondsFormat, TimeZone};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Walks the changelog document once and collects one entry per `<h3>`
/// section, in document order.
///
/// Sections are delimited by the next `<h3>` or an `<hr>`; a section still
/// open when the document ends is discarded. A tokenizer error is treated
/// the same as end of input: the scan stops and returns whatever was
/// collected up to that point.
pub fn scan_entries(document: &str, anchor_base: &str) -> EntrySnapshot {
    let mut reader = Reader::from_str(document);
    reader.config_mut().check_end_names = false;

    let mut scan = SectionScan::new(anchor_base);

    loop {
        match reader.read_event() {
            Ok(Event::Eof) | Err(_) => break,
            Ok(Event::Start(e)) => scan.on_tag_open(&e, true),
            Ok(Event::Empty(e)) => scan.on_tag_open(&e, false),
            Ok(Event::End(e)) => {
                let name = e.name();
                if !scan.title.is_empty() && name.as_ref() == b"hr" {
                    scan.finalize();
                }
                if name.as_ref() == b"h3" {
                    scan.depth = scan.depth.saturating_sub(1);
                } else if !scan.title.is_empty() {
                    scan.append_markup(&render_end_tag(&e));
                }
            }
            Ok(Event::Text(e)) => {
                let text = match e.unescape() {
                    Ok(t) => t.into_owned(),
                    Err(_) => String::from_utf8_lossy(e.as_ref()).into_owned(),
                };
                scan.on_text(&text);
            }
            Ok(_) => {}
        }
    }

    scan.snapshot
}

// per-invocation accumulator state; nothing carries over between scans
struct SectionScan {
    anchor_base: String,
    // non-zero while the cursor sits inside a heading element
    depth: usize,
    anchor: String,
    date: String,
    title: String,
    content: String,
    snapshot: EntrySnapshot,
}

impl SectionScan {
    fn new(anchor_base: &str) -> Self {
        Self {
            anchor_base: anchor_base.to_string(),
            depth: 0,
            anchor: String::new(),
            date: String::new(),
            title: String::new(),
            content: String::new(),
            snapshot: EntrySnapshot::default(),
        }
    }

    // `opens_section` distinguishes a real start tag from a self-closing one:
    // a self-closing h3 never opens a section
    fn on_tag_open(&mut self, e: &BytesStart<'_>, opens_section: bool) {
        let name = e.name();
        let name = name.as_ref();

        // the pending section closes when the next heading or a rule begins;
        // the anchor for the new heading is only picked up afterwards, so the
        // closing entry keeps the anchor of its own heading
        if !self.title.is_empty() && ((name == b"h3" && opens_section) || name == b"hr") {
            self.finalize();
        }

        if name == b"h3" {
            if !opens_section {
                return;
            }
            self.depth += 1;
            self.title.clear();
            self.content.clear();

            if let Some(value) = id_attribute(e) {
                self.anchor = format!("{}#{}", self.anchor_base, value);
            }
        } else if !self.title.is_empty() {
            self.append_markup(&render_start_tag(e));
        }
    }

    fn on_text(&mut self, text: &str) {
        if self.depth > 0 {
            self.read_heading_text(text);
        } else if !self.title.is_empty() {
            self.content.push_str(text);
        }
    }

    // heading text follows the `YYYY/MM/DD - title` convention; text without
    // the separator is treated as a continuation of the current title
    fn read_heading_text(&mut self, text: &str) {
        match text.split_once('-') {
            Some((date_part, rest)) => {
                if let Some(stamp) = heading_date(date_part) {
                    self.date = stamp;
                }
                // skip one character after the separator (the space)
                self.title = rest.get(1..).unwrap_or_default().to_string();
            }
            None => self.title.push_str(text),
        }
    }

    fn append_markup(&mut self, rendered: &str) {
        if self.depth > 0 {
            self.title.push_str(rendered);
        } else {
            self.content.push_str(rendered);
        }
    }

    // closes the pending section into both sequences; a heading that never
    // carried an id attribute inherits the previously seen anchor
    fn finalize(&mut self) {
        let title = self.title.trim().to_string();

        self.snapshot.html.push(Entry {
            title: title.clone(),
            link: self.anchor.clone(),
            updated: self.date.clone(),
            id: self.anchor.clone(),
            content: self.content.clone(),
            kind: ContentKind::Html,
        });
        self.snapshot.plain.push(Entry {
            title,
            link: self.anchor.clone(),
            updated: self.date.clone(),
            id: self.anchor.clone(),
            content: strip_tags(&self.content),
            kind: ContentKind::Plain,
        });
    }
}

/// Parses the date half of a heading as `YYYY/MM/DD` and renders it as an
/// RFC 3339 timestamp at local midnight. Returns `None` unless all three
/// components are present and numeric and name a real calendar day.
pub fn heading_date(raw: &str) -> Option<String> {
    let parts: Vec<&str> = raw.trim().split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let year: i32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let day: u32 = parts[2].parse().ok()?;

    Local
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, false))
}

fn id_attribute(e: &BytesStart<'_>) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"id")
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}
