//! HTML → terminal text.
//!
//! Command output is a small, trusted subset of HTML: escaped text, `<a>`
//! links, a `<div>` around ASCII art, and whatever the Markdown renderer
//! emits for the readme. Tags are dropped, block-level tags become line
//! breaks, links keep their target in parentheses, entities are decoded.

/// Strips markup from `html` and decodes entities.
///
/// Runs of blank lines collapse to one and trailing whitespace is removed.
pub fn to_plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut link: Option<(String, usize)> = None;
    let mut rest = html;

    while let Some(lt) = rest.find('<') {
        push_decoded(&mut out, &rest[..lt]);
        let Some(len) = rest[lt..].find('>') else {
            push_decoded(&mut out, &rest[lt..]);
            rest = "";
            break;
        };
        apply_tag(&rest[lt + 1..lt + len], &mut out, &mut link);
        rest = &rest[lt + len + 1..];
    }
    push_decoded(&mut out, rest);

    collapse_blank_lines(out.trim_end())
}

fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0;
    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines > 2 {
                continue;
            }
        } else {
            newlines = 0;
        }
        out.push(c);
    }
    out
}

fn apply_tag(tag: &str, out: &mut String, link: &mut Option<(String, usize)>) {
    let closing = tag.starts_with('/');
    let name = tag
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match (name.as_str(), closing) {
        ("br", _) => out.push('\n'),
        ("hr", _) => {
            ensure_newline(out);
            out.push_str("────────\n");
        }
        ("li", false) => {
            ensure_newline(out);
            out.push_str("• ");
        }
        ("a", false) => {
            let href = attribute(tag, "href").map(decode).unwrap_or_default();
            *link = Some((href, out.len()));
        }
        ("a", true) => {
            if let Some((href, start)) = link.take()
                && !href.is_empty()
                && out.get(start..) != Some(href.as_str())
            {
                out.push_str(&format!(" ({href})"));
            }
        }
        ("p" | "div" | "pre" | "blockquote" | "ul" | "ol" | "li" | "table" | "tr", _)
        | ("h1" | "h2" | "h3" | "h4" | "h5" | "h6", _) => ensure_newline(out),
        _ => {}
    }
}

fn ensure_newline(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Value of `name="..."` inside a tag, still entity-encoded.
fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let key = format!("{name}=\"");
    let start = tag.find(&key)? + key.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

pub fn decode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_decoded(&mut out, text);
    out
}

fn push_decoded(out: &mut String, text: &str) {
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail.find(';').filter(|&end| end <= 10) {
            Some(end) => match entity(&tail[1..end]) {
                Some(c) => {
                    out.push(c);
                    rest = &tail[end + 1..];
                }
                None => {
                    out.push('&');
                    rest = &tail[1..];
                }
            },
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
}

fn entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(to_plain_text("a\nbunch\nof"), "a\nbunch\nof");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(to_plain_text("&lt;b&gt; &amp; &quot;x&quot; &#39;y&#x27;"), "<b> & \"x\" 'y'");
    }

    #[test]
    fn unknown_entities_are_left_alone() {
        assert_eq!(to_plain_text("fish &chips; & more"), "fish &chips; & more");
    }

    #[test]
    fn link_keeps_its_target() {
        let html = r#"click <a class="link" href="https://example.com/?a=1&amp;b=2" target="_blank">here</a>."#;
        assert_eq!(to_plain_text(html), "click here (https://example.com/?a=1&b=2).");
    }

    #[test]
    fn link_labelled_with_its_url_is_not_repeated() {
        let html = r#"<a href="https://x.dev">https://x.dev</a>"#;
        assert_eq!(to_plain_text(html), "https://x.dev");
    }

    #[test]
    fn block_tags_break_lines() {
        let html = "<h1>Hello</h1>\n<p>some <em>text</em></p>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n";
        assert_eq!(to_plain_text(html), "Hello\n\nsome text\n\n• one\n\n• two");
    }

    #[test]
    fn blank_line_runs_collapse() {
        assert_eq!(to_plain_text("a\n\n\n\nb\n\n"), "a\n\nb");
    }

    #[test]
    fn unterminated_tag_is_kept_as_text() {
        assert_eq!(to_plain_text("a <b"), "a <b");
    }
}
