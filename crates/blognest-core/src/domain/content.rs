//! Lightweight rendering of post content.
//!
//! Content is plain text where a line starting with `## ` or `### ` is a
//! heading. Code fence markers are dropped and blank lines become breaks.

use serde::Serialize;

/// One rendered line of a post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    Heading2(String),
    Heading3(String),
    Paragraph(String),
    Break,
}

/// Classify each line of `content` into a [`Block`].
pub fn render(content: &str) -> Vec<Block> {
    content
        .split('\n')
        .filter_map(|line| {
            if let Some(text) = line.strip_prefix("## ") {
                Some(Block::Heading2(text.to_string()))
            } else if let Some(text) = line.strip_prefix("### ") {
                Some(Block::Heading3(text.to_string()))
            } else if line.starts_with("```") {
                None
            } else if line.trim().is_empty() {
                Some(Block::Break)
            } else {
                Some(Block::Paragraph(line.to_string()))
            }
        })
        .collect()
}
