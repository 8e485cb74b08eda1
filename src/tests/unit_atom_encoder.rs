use crate::domain::{ContentKind, Entry};
use crate::feed::{render_feed, FEED_AUTHOR_EMAIL, FEED_AUTHOR_NAME, FEED_SITE, FEED_TITLE};

fn sample_entry(kind: ContentKind) -> Entry {
    let content = match kind {
        ContentKind::Html => "<b>bold</b> text".to_string(),
        ContentKind::Plain => "bold text".to_string(),
    };

    Entry {
        title: "Example Title".to_string(),
        link: "http://www.openbsd.org/faq/current.html#20240115".to_string(),
        updated: "2024-01-15T00:00:00+00:00".to_string(),
        id: "http://www.openbsd.org/faq/current.html#20240115".to_string(),
        content,
        kind,
    }
}

// the envelope carries the fixed feed identity plus the caller's timestamp
#[test]
fn test_envelope_fields() {
    let xml = render_feed(&[], "2026-08-07T00:00:00+00:00").expect("encode should succeed");

    assert!(xml.contains(r#"<feed xmlns="http://www.w3.org/2005/Atom">"#));
    assert!(xml.contains(&format!("<title>{}</title>", FEED_TITLE)));
    assert!(xml.contains(&format!(r#"<link href="{}" rel="self"/>"#, FEED_SITE)));
    assert!(xml.contains(&format!(r#"<link href="{}"/>"#, FEED_SITE)));
    assert!(xml.contains(&format!("<id>{}</id>", FEED_SITE)));
    assert!(xml.contains("<updated>2026-08-07T00:00:00+00:00</updated>"));
    assert!(xml.contains(&format!("<name>{}</name>", FEED_AUTHOR_NAME)));
    assert!(xml.contains(&format!("<email>{}</email>", FEED_AUTHOR_EMAIL)));
    assert!(!xml.contains("<entry>"));
}

// html-variant content is marked with the html type and the markup itself
// arrives escaped
#[test]
fn test_html_entry_content() {
    let xml = render_feed(&[sample_entry(ContentKind::Html)], "2026-08-07T00:00:00+00:00")
        .expect("encode should succeed");

    assert!(xml.contains("<entry>"));
    assert!(xml.contains("<title>Example Title</title>"));
    assert!(xml.contains(r#"<link href="http://www.openbsd.org/faq/current.html#20240115"/>"#));
    assert!(xml.contains(r#"<content type="html">"#));
    assert!(xml.contains("&lt;b&gt;bold&lt;/b&gt; text"));
}

// plain-variant content carries no type marker
#[test]
fn test_plain_entry_content() {
    let xml = render_feed(&[sample_entry(ContentKind::Plain)], "2026-08-07T00:00:00+00:00")
        .expect("encode should succeed");

    assert!(xml.contains("<content>bold text</content>"));
    assert!(!xml.contains(r#"type="html""#));
}

#[test]
fn test_entries_keep_document_order() {
    let mut first = sample_entry(ContentKind::Plain);
    first.title = "First".to_string();
    let mut second = sample_entry(ContentKind::Plain);
    second.title = "Second".to_string();

    let xml = render_feed(&[first, second], "2026-08-07T00:00:00+00:00")
        .expect("encode should succeed");

    let first_pos = xml.find("<title>First</title>").expect("first entry present");
    let second_pos = xml.find("<title>Second</title>").expect("second entry present");
    assert!(first_pos < second_pos);
}

#[test]
fn test_special_characters_are_escaped() {
    let mut entry = sample_entry(ContentKind::Plain);
    entry.title = "pkg_add -u & friends".to_string();
    entry.content = "a < b".to_string();

    let xml = render_feed(&[entry], "2026-08-07T00:00:00+00:00").expect("encode should succeed");

    assert!(xml.contains("pkg_add -u &amp; friends"));
    assert!(xml.contains("a &lt; b"));
}
