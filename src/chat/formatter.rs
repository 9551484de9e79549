//! Reply text → renderable blocks.
//!
//! Model replies follow a light convention: blank lines separate paragraphs,
//! lines starting with `-`, `•` or `* ` are list items and `**phrase**` is
//! emphasis. [`format_reply`] turns that into [`Block`]s; the renderers turn
//! blocks into escaped HTML or terminal text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    // `*` only counts as a marker when followed by whitespace, so a line
    // opening with `**bold**` stays a paragraph.
    Regex::new(r"^(?:[-•]|\*(?:\s|$))\s*(.*)$").expect("list marker regex")
});

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold regex"));

/// Inline run inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Inline {
    Text(String),
    Bold(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "inlines", rename_all = "lowercase")]
pub enum Block {
    /// Small vertical gap for an empty line.
    Spacer,
    Bullet(Vec<Inline>),
    Paragraph(Vec<Inline>),
}

/// Split `text` into blocks, one per line.
pub fn format_reply(text: &str) -> Vec<Block> {
    text.split('\n')
        .map(|line| {
            let line = line.trim();
            if line.is_empty() {
                Block::Spacer
            } else if let Some(caps) = LIST_ITEM.captures(line) {
                Block::Bullet(emphasize(caps.get(1).map_or("", |m| m.as_str())))
            } else {
                Block::Paragraph(emphasize(line))
            }
        })
        .collect()
}

/// Replace each `**phrase**` with a bold run. Not recursive, not nested;
/// an unmatched `**` stays literal.
pub fn emphasize(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut last = 0;
    for caps in BOLD.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            out.push(Inline::Text(text[last..whole.start()].to_string()));
        }
        out.push(Inline::Bold(inner.as_str().to_string()));
        last = whole.end();
    }
    if last < text.len() {
        out.push(Inline::Text(text[last..].to_string()));
    }
    out
}

/// Escape text for insertion into HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn inlines_html(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(t) => out.push_str(&escape_html(t)),
            Inline::Bold(t) => {
                out.push_str("<strong>");
                out.push_str(&escape_html(t));
                out.push_str("</strong>");
            }
        }
    }
}

/// HTML for the chat bubble. All text is escaped before markup is added.
pub fn render_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Spacer => out.push_str(r#"<div class="chat-gap"></div>"#),
            Block::Bullet(inlines) => {
                out.push_str(r#"<div class="chat-li"><span class="chat-dot">•</span><span>"#);
                inlines_html(inlines, &mut out);
                out.push_str("</span></div>");
            }
            Block::Paragraph(inlines) => {
                out.push_str("<p>");
                inlines_html(inlines, &mut out);
                out.push_str("</p>");
            }
        }
    }
    out
}

/// Plain terminal rendering: ANSI bold, `•` bullets, blank spacer lines.
pub fn render_terminal(blocks: &[Block]) -> String {
    let lines: Vec<String> = blocks
        .iter()
        .map(|block| match block {
            Block::Spacer => String::new(),
            Block::Bullet(inlines) => format!("  • {}", inlines_terminal(inlines)),
            Block::Paragraph(inlines) => inlines_terminal(inlines),
        })
        .collect();
    lines.join("\n")
}

fn inlines_terminal(inlines: &[Inline]) -> String {
    inlines
        .iter()
        .map(|i| match i {
            Inline::Text(t) => t.clone(),
            Inline::Bold(t) => format!("\x1b[1m{t}\x1b[0m"),
        })
        .collect()
}
