//! WordprocessingML paragraph serialization

use crate::render::TextBlock;
use quick_xml::escape::escape;

/// One `<w:p>` with an optional paragraph style and a single text run
pub fn paragraph(block: &TextBlock) -> String {
    let text = sanitize(&block.text);
    let text = escape(text.as_str());

    match block.style.style_id() {
        Some(style) => format!(
            r#"<w:p><w:pPr><w:pStyle w:val="{}"/></w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            style, text
        ),
        None => format!(
            r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            text
        ),
    }
}

/// Drop characters XML 1.0 does not allow
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| is_xml_char(*c)).collect()
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || (('\u{20}'..='\u{D7FF}').contains(&c))
        || (('\u{E000}'..='\u{FFFD}').contains(&c))
        || c >= '\u{10000}'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::BlockStyle;

    #[test]
    fn test_body_paragraph() {
        let xml = paragraph(&TextBlock::body("  \"a\": 1 < 2 & 3"));
        assert_eq!(
            xml,
            r#"<w:p><w:r><w:t xml:space="preserve">  &quot;a&quot;: 1 &lt; 2 &amp; 3</w:t></w:r></w:p>"#
        );
    }

    #[test]
    fn test_heading_paragraph() {
        let xml = paragraph(&TextBlock::new("GET /items", BlockStyle::Heading3));
        assert!(xml.starts_with(r#"<w:p><w:pPr><w:pStyle w:val="Heading3"/></w:pPr>"#));
        assert!(xml.contains(">GET /items<"));
    }

    #[test]
    fn test_unicode_is_literal() {
        let xml = paragraph(&TextBlock::body("Olá, 世界 🚀"));
        assert!(xml.contains("Olá, 世界 🚀"));
        assert!(!xml.contains("&#"));
    }

    #[test]
    fn test_control_characters_are_dropped() {
        assert_eq!(sanitize("a\u{0}b\u{1b}c\td\u{FFFF}"), "abc\td");
    }
}
