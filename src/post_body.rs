//! Block formatting for single post bodies.
//!
//! Post content is plain text with blank-line separated blocks. A small set
//! of line prefixes marks headings, quotes and bullet lists.

use serde::Serialize;

const CONTENT_UNAVAILABLE: &str = "Content not available.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading(String),
    Subheading(String),
    Quote(String),
    List(Vec<String>),
    Paragraph(String),
}

pub fn format_body(content: Option<&str>) -> Vec<Block> {
    let content = match content {
        Some(c) if !c.trim().is_empty() => c,
        _ => return vec![Block::Paragraph(CONTENT_UNAVAILABLE.to_string())],
    };

    // normalise CRLF so "\r\n\r\n" separates blocks too
    let content = content.replace("\r\n", "\n");
    content
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(parse_block)
        .collect()
}

fn parse_block(block: &str) -> Block {
    if let Some(text) = block.strip_prefix("## ") {
        return Block::Heading(text.to_string());
    }
    if let Some(text) = block.strip_prefix("### ") {
        return Block::Subheading(text.to_string());
    }
    if let Some(text) = block.strip_prefix("> ") {
        return Block::Quote(text.to_string());
    }
    if block.starts_with("• ") {
        let items = block
            .lines()
            .filter_map(|line| line.strip_prefix("• "))
            .map(str::to_string)
            .collect();
        return Block::List(items);
    }
    Block::Paragraph(block.to_string())
}
