//! Safe rendering of card content.
//!
//! Text payloads are untrusted. The renderer supports a deliberately tiny
//! dialect — fenced code blocks, `**bold**`, `` `inline code` `` and line
//! breaks — and nothing else. The pipeline order is the correctness
//! property:
//!
//! 1. Fenced code blocks are lifted out into placeholder tokens, their
//!    bodies escaped and wrapped immediately.
//! 2. The remaining text is HTML-escaped.
//! 3. Bold and inline-code substitutions run on the already-escaped text.
//! 4. Newlines become `<br>`.
//! 5. Placeholders are restored last.
//!
//! Escaping before substitution means injected markup never survives;
//! restoring after substitution means fence bodies are escaped exactly once
//! and step 3 can never rewrite them.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::pair::CardPayload;

/// Placeholder sentinels from the private use area. Step-2 escaping leaves
/// them untouched and no substitution can produce them.
const TOKEN_OPEN: char = '\u{E000}';
const TOKEN_CLOSE: char = '\u{E001}';

/// A card face in presentation-safe form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedCard {
    /// An image face: a URL plus the filename as alt-text fallback.
    Image { url: String, alt: String },
    /// A text face rendered to safe HTML.
    Html { html: String },
}

/// Renders card payloads. Holds the compiled pipeline regexes, so build one
/// and reuse it across sessions.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    fence: Regex,
    bold: Regex,
    inline_code: Regex,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer {
    /// Compile the pipeline.
    #[must_use]
    pub fn new() -> Self {
        // Language tags are restricted to [a-z0-9+#-]; anything else after
        // the opening fence is treated as block content.
        Self {
            fence: Regex::new(r"(?s)```([a-z0-9+#-]*)\r?\n?(.*?)```").expect("fence regex"),
            bold: Regex::new(r"\*\*([^*]+)\*\*").expect("bold regex"),
            inline_code: Regex::new(r"`([^`]+)`").expect("inline code regex"),
        }
    }

    /// Render a payload to its display-safe form.
    ///
    /// Image payloads bypass the text pipeline entirely.
    #[must_use]
    pub fn render(&self, payload: &CardPayload) -> RenderedCard {
        match payload {
            CardPayload::Image { filename, url } => RenderedCard::Image {
                url: url.clone(),
                alt: filename.clone(),
            },
            CardPayload::Text { raw } => RenderedCard::Html {
                html: self.render_text(raw),
            },
        }
    }

    /// Run the five-step text pipeline.
    #[must_use]
    pub fn render_text(&self, raw: &str) -> String {
        // Step 1: lift fenced blocks out, escaping their bodies now.
        let mut blocks: Vec<String> = Vec::new();
        let protected = self.fence.replace_all(raw, |caps: &Captures| {
            let tag = &caps[1];
            let body = escape_html(&caps[2]);
            let html = if tag.is_empty() {
                format!("<pre><code>{body}</code></pre>")
            } else {
                format!("<pre><code class=\"language-{tag}\">{body}</code></pre>")
            };
            let token = placeholder(blocks.len());
            blocks.push(html);
            token
        });

        // Step 2: escape everything that is left.
        let escaped = escape_html(&protected);

        // Step 3: structural substitutions on the escaped text.
        let with_bold = self.bold.replace_all(&escaped, "<strong>$1</strong>");
        let with_code = self.inline_code.replace_all(&with_bold, "<code>$1</code>");

        // Step 4: line breaks.
        let mut html = with_code.replace('\n', "<br>");

        // Step 5: put the fenced blocks back.
        for (i, block) in blocks.iter().enumerate() {
            html = html.replace(&placeholder(i), block);
        }

        html
    }
}

fn placeholder(index: usize) -> String {
    format!("{TOKEN_OPEN}{index}{TOKEN_CLOSE}")
}

/// Escape the five HTML-special characters. `&` goes first so entities are
/// not double-escaped.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
