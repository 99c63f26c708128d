//! Citation rendering and detection

use serde::{Deserialize, Serialize};

/// Header line of an inline citation block
pub const CITATION_MARKER: &str = "📚 Learn more:";

/// Where help-center references go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationStyle {
    /// `help_center_urls` and `topic` fields on the assistant message
    #[default]
    MetadataUrls,
    /// A single `help_center_url` field on the assistant message
    MetadataPrimary,
    /// A trailing bulleted block in the message content
    Inline,
}

/// Render the inline block appended after the content
pub fn render_block(urls: &[String]) -> String {
    let mut block = format!("\n\n{}", CITATION_MARKER);
    for url in urls {
        block.push_str("\n• ");
        block.push_str(url);
    }
    block
}

/// Whether content already carries a citation block
pub fn has_block(content: &str) -> bool {
    content.contains(CITATION_MARKER)
}

/// Content with any citation block removed
pub fn strip_block(content: &str) -> &str {
    match content.find(CITATION_MARKER) {
        Some(idx) => content[..idx].trim_end(),
        None => content,
    }
}

/// Append a citation block unless one is present
///
/// The original content is kept byte for byte in front of the block.
pub fn append_block(content: &str, urls: &[String]) -> String {
    if has_block(content) {
        return content.to_string();
    }
    format!("{}{}", content, render_block(urls))
}
