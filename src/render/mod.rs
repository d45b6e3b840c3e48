//! Line-oriented markdown block renderer
//!
//! Each line is classified independently by a first-match prefix rule; there
//! is no multi-line merging, no nesting, and deliberately no inline parsing.
//! Emphasis markers (`**`, `*`) inserted by the editor pass through as
//! literal characters so preview output never diverges from what the user
//! typed. Do not "improve" this.

use serde::Serialize;

/// A classified display block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "lowercase")]
pub enum Block {
    /// Heading with level 1-3, prefix stripped
    Heading { level: u8, text: String },
    /// Unordered list item, prefix stripped
    ListItem { text: String },
    /// Everything else, including empty lines (empty paragraphs)
    Paragraph { text: String },
    /// Emitted alone when the input has no content at all
    Placeholder,
}

/// Convert marker text into an ordered block sequence
///
/// Pure and deterministic: the same input always yields the same blocks.
/// Empty input yields exactly one [`Block::Placeholder`].
pub fn render(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return vec![Block::Placeholder];
    }

    // split('\n') rather than lines(): a trailing newline means a trailing
    // empty paragraph, and lines() would drop it.
    text.split('\n')
        .map(|line| {
            // Prefix rules are ordered longest first; the trailing space is
            // part of the marker ("#Title" is a paragraph).
            if let Some(rest) = line.strip_prefix("### ") {
                Block::Heading { level: 3, text: rest.to_string() }
            } else if let Some(rest) = line.strip_prefix("## ") {
                Block::Heading { level: 2, text: rest.to_string() }
            } else if let Some(rest) = line.strip_prefix("# ") {
                Block::Heading { level: 1, text: rest.to_string() }
            } else if let Some(rest) = line.strip_prefix("- ") {
                Block::ListItem { text: rest.to_string() }
            } else {
                Block::Paragraph { text: line.to_string() }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_placeholder() {
        assert_eq!(render(""), vec![Block::Placeholder]);
    }

    #[test]
    fn test_heading_precedence() {
        assert_eq!(
            render("### Title"),
            vec![Block::Heading { level: 3, text: "Title".to_string() }]
        );
        assert_eq!(
            render("## Title"),
            vec![Block::Heading { level: 2, text: "Title".to_string() }]
        );
        assert_eq!(
            render("# Title"),
            vec![Block::Heading { level: 1, text: "Title".to_string() }]
        );
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        assert_eq!(
            render("#Title"),
            vec![Block::Paragraph { text: "#Title".to_string() }]
        );
    }

    #[test]
    fn test_list_item() {
        assert_eq!(
            render("- first point"),
            vec![Block::ListItem { text: "first point".to_string() }]
        );
    }

    #[test]
    fn test_empty_lines_are_empty_paragraphs() {
        assert_eq!(
            render("a\n\nb"),
            vec![
                Block::Paragraph { text: "a".to_string() },
                Block::Paragraph { text: String::new() },
                Block::Paragraph { text: "b".to_string() },
            ]
        );
    }

    #[test]
    fn test_trailing_newline_renders_trailing_empty_paragraph() {
        assert_eq!(
            render("a\n"),
            vec![
                Block::Paragraph { text: "a".to_string() },
                Block::Paragraph { text: String::new() },
            ]
        );
    }

    #[test]
    fn test_inline_markers_pass_through() {
        assert_eq!(
            render("**bold** and *italic*"),
            vec![Block::Paragraph { text: "**bold** and *italic*".to_string() }]
        );
    }

    #[test]
    fn test_lines_classified_independently() {
        let blocks = render("# H1\n- item\nplain\n## H2");
        assert_eq!(
            blocks,
            vec![
                Block::Heading { level: 1, text: "H1".to_string() },
                Block::ListItem { text: "item".to_string() },
                Block::Paragraph { text: "plain".to_string() },
                Block::Heading { level: 2, text: "H2".to_string() },
            ]
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let input = "# H\ntext\n- a\n- b";
        assert_eq!(render(input), render(input));
    }
}
