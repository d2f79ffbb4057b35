//! Display form of post content lines

use super::model::ContentLine;

/// Destination used for link lines; links are placeholders
pub const PLACEHOLDER_HREF: &str = "#";

/// How a rendered line is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Plain text
    Text,
    /// Clickable text pointing at [`PLACEHOLDER_HREF`]
    Link,
}

/// A content line ready for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedLine<'a> {
    pub kind: LineKind,
    pub text: &'a str,
}

impl<'a> RenderedLine<'a> {
    /// Link target, if this line is a link
    pub fn href(&self) -> Option<&'static str> {
        match self.kind {
            LineKind::Link => Some(PLACEHOLDER_HREF),
            LineKind::Text => None,
        }
    }
}

impl ContentLine {
    /// Render this line; unknown lines produce nothing
    pub fn render(&self) -> Option<RenderedLine<'_>> {
        match self {
            ContentLine::Paragraph { text } => Some(RenderedLine {
                kind: LineKind::Text,
                text,
            }),
            ContentLine::Link { text } => Some(RenderedLine {
                kind: LineKind::Link,
                text,
            }),
            ContentLine::Unknown => None,
        }
    }
}

/// Render a post body in order, skipping unknown lines
pub fn render_content(lines: &[ContentLine]) -> Vec<RenderedLine<'_>> {
    lines.iter().filter_map(ContentLine::render).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_link_renders_as_clickable_text() {
        let line = ContentLine::link("github.com/foo");
        let rendered = line.render().unwrap();
        assert_eq!(rendered.kind, LineKind::Link);
        assert_eq!(rendered.text, "github.com/foo");
        assert_eq!(rendered.href(), Some("#"));
    }

    #[test]
    fn test_paragraph_renders_as_plain_text() {
        let line = ContentLine::paragraph("hi");
        let rendered = line.render().unwrap();
        assert_eq!(rendered.kind, LineKind::Text);
        assert_eq!(rendered.text, "hi");
        assert_eq!(rendered.href(), None);
    }

    #[test]
    fn test_unknown_lines_are_skipped() {
        let lines = vec![
            ContentLine::paragraph("a"),
            ContentLine::Unknown,
            ContentLine::link("b"),
        ];
        let rendered = render_content(&lines);
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].text, "a");
        assert_eq!(rendered[1].kind, LineKind::Link);
    }
}
