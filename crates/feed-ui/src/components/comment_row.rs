//! A single comment in a post's thread

use crate::theme::Theme;
use ratatui::prelude::*;

/// Stateless view of one comment.
///
/// The row never changes the thread itself; it hands its own value to the
/// removal callback and the owner decides what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentRow<'a> {
    value: &'a str,
}

impl<'a> CommentRow<'a> {
    /// Create a row for a comment value
    pub fn new(value: &'a str) -> Self {
        Self { value }
    }

    /// The comment text
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Ask the owner to remove this comment
    pub fn request_removal<F>(&self, on_remove: F)
    where
        F: FnOnce(&str),
    {
        on_remove(self.value);
    }

    /// Display lines; the selected row carries a removal hint
    pub fn lines(&self, selected: bool, theme: &Theme) -> Vec<Line<'a>> {
        let marker_style = Style::default().fg(theme.accent);
        let mut text_style = Style::default();
        if selected {
            text_style = text_style.bg(theme.selection).add_modifier(Modifier::BOLD);
        }

        let mut lines: Vec<Line<'a>> = Vec::new();
        for (i, part) in self.value.split('\n').enumerate() {
            let marker = if i == 0 { " ▌ " } else { "   " };
            lines.push(Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(part, text_style),
            ]));
        }

        if selected {
            lines.push(Line::from(Span::styled(
                "   x excluir comentário",
                Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
            )));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_removal_passes_own_value() {
        let row = CommentRow::new("nice!");
        let mut received = None;
        row.request_removal(|v| received = Some(v.to_string()));
        assert_eq!(received.as_deref(), Some("nice!"));
    }

    #[test]
    fn test_lines_include_text() {
        let theme = Theme::default();
        let lines = CommentRow::new("hello").lines(false, &theme);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans.iter().any(|s| s.content == "hello"));
    }

    #[test]
    fn test_selected_row_has_hint() {
        let theme = Theme::default();
        let lines = CommentRow::new("hello").lines(true, &theme);
        assert_eq!(lines.len(), 2);
    }
}
