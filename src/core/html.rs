//! HTML-safety helpers for command output.
//!
//! Every string a command returns is rendered as trusted HTML, so any text
//! that did not originate in this crate (arguments, settings values, provider
//! bodies) must pass through [`escape`] before it is embedded.

/// Escapes `&`, `<`, `>` and `"`. Attributes are always double-quoted, so `'` is left as is.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Builds an anchor that opens in a new tab. Both the target and the label are escaped.
pub fn link(href: &str, label: &str) -> String {
    format!(
        "<a class=\"link\" href=\"{}\" target=\"_blank\">{}</a>",
        escape(href),
        escape(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("a b c"), "a b c");
    }

    #[test]
    fn escape_replaces_markup() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; 'y'&lt;/script&gt;"
        );
    }

    #[test]
    fn link_escapes_both_parts() {
        let html = link("https://example.com/?a=1&b=2", "<me>");
        assert!(html.contains("href=\"https://example.com/?a=1&amp;b=2\""));
        assert!(html.contains("&lt;me&gt;</a>"));
    }
}
