//! Text blocks: the unit handed from the renderer to the packager

use std::fmt;

/// Paragraph style of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockStyle {
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Body,
}

impl BlockStyle {
    /// Word paragraph style id, `None` for plain body text
    pub fn style_id(self) -> Option<&'static str> {
        match self {
            BlockStyle::Heading1 => Some("Heading1"),
            BlockStyle::Heading2 => Some("Heading2"),
            BlockStyle::Heading3 => Some("Heading3"),
            BlockStyle::Heading4 => Some("Heading4"),
            BlockStyle::Body => None,
        }
    }

    pub fn is_heading(self) -> bool {
        self != BlockStyle::Body
    }
}

/// One rendered paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub text: String,
    pub style: BlockStyle,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, style: BlockStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self::new(text, BlockStyle::Body)
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style.style_id() {
            Some(style) => write!(f, "[{}] {}", style, self.text),
            None => f.write_str(&self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_ids() {
        assert_eq!(BlockStyle::Heading3.style_id(), Some("Heading3"));
        assert_eq!(BlockStyle::Body.style_id(), None);
        assert!(BlockStyle::Heading1.is_heading());
        assert!(!BlockStyle::Body.is_heading());
    }

    #[test]
    fn test_display() {
        assert_eq!(TextBlock::new("GET /items", BlockStyle::Heading3).to_string(), "[Heading3] GET /items");
        assert_eq!(TextBlock::body("  \"id\": 0").to_string(), "  \"id\": 0");
    }
}
