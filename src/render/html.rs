//! Minimal HTML assembly
//!
//! Deterministic string building with escaping at every interpolation point.
//! No templating engine; the page is one document with a fixed section order.

/// Escape text for HTML (minimal, deterministic).
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

pub struct HtmlBuilder {
    buf: String,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(32 * 1024),
        }
    }

    /// Append a trusted markup fragment verbatim.
    pub fn raw(&mut self, fragment: &str) -> &mut Self {
        self.buf.push_str(fragment);
        self
    }

    /// Append untrusted content, escaped.
    pub fn text(&mut self, content: &str) -> &mut Self {
        self.buf.push_str(&esc(content));
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            esc(r#"<b>&"quoted"'</b>"#),
            "&lt;b&gt;&amp;&quot;quoted&quot;&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn builder_escapes_text_but_not_raw() {
        let mut html = HtmlBuilder::new();
        html.raw("<p>").text("a < b").raw("</p>");
        assert_eq!(html.finish(), "<p>a &lt; b</p>");
    }
}
