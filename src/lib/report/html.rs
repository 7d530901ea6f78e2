//! Minimal HTML building. Each helper wraps `content` in a tag and returns the markup.

/// `<tag attrib>content</tag>`, or `<tag>content</tag>` when `attrib` is empty
pub fn tag(name: &str, content: &str, attrib: &str) -> String {
    if attrib.is_empty() {
        format!("<{name}>{content}</{name}>")
    } else {
        format!("<{name} {attrib}>{content}</{name}>")
    }
}

/// Put each line of `s` on its own line, indented by two spaces
pub fn indent(s: &str) -> String {
    let mut out = String::from("\n");
    for line in s.split('\n') {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

pub fn html(content: &str) -> String {
    tag("html", content, "")
}

pub fn head(content: &str) -> String {
    tag("head", content, "")
}

pub fn title(content: &str) -> String {
    tag("title", content, "")
}

pub fn body(content: &str) -> String {
    tag("body", content, "")
}

pub fn h1(content: &str) -> String {
    tag("h1", content, "")
}

pub fn h2(content: &str) -> String {
    tag("h2", content, "")
}

pub fn table_attr(content: &str, attrib: &str) -> String {
    tag("table", content, attrib)
}

pub fn tr(content: &str) -> String {
    tag("tr", content, "")
}

pub fn th(content: &str) -> String {
    tag("th", content, "")
}

pub fn td(content: &str) -> String {
    tag("td", content, "")
}

pub fn td_attr(content: &str, attrib: &str) -> String {
    tag("td", content, attrib)
}
