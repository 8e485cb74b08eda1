use quick_xml::events::{BytesEnd, BytesStart};

// re-renders a start (or self-closing) tag event back into markup text,
// attributes in the order the tokenizer reported them
pub fn render_start_tag(e: &BytesStart<'_>) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(&String::from_utf8_lossy(e.name().as_ref()));

    for attr in e.attributes().flatten() {
        out.push(' ');
        out.push_str(&String::from_utf8_lossy(attr.key.as_ref()));
        out.push_str("=\"");
        out.push_str(&String::from_utf8_lossy(&attr.value));
        out.push('"');
    }

    out.push('>');
    out
}

pub fn render_end_tag(e: &BytesEnd<'_>) -> String {
    format!("</{}>", String::from_utf8_lossy(e.name().as_ref()))
}

/// Removes every `<...>` span from reconstructed markup, leaving the bare
/// text. An unterminated tag swallows the remainder of the string.
pub fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;

    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }

    out
}
