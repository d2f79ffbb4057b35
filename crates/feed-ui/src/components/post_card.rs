//! Post card: author, published time, content, comment form and thread

use super::comment_row::CommentRow;
use crate::theme::Theme;
use chrono::{DateTime, Utc};
use feed_core::post::LineKind;
use feed_core::PostContainer;
use ratatui::{prelude::*, widgets::*};

/// Prefix of the draft line inside the form
pub const DRAFT_PREFIX: &str = "> ";
const DRAFT_PLACEHOLDER: &str = "Deixe um comentário";
const FORM_TITLE: &str = "Deixe seu feedback";
const SUBMIT_LABEL: &str = "[ Publicar ]";

/// How the card is being interacted with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardFocus {
    /// The card is the current post
    pub focused: bool,
    /// The comment form has keyboard focus
    pub editing: bool,
    /// Index of the highlighted comment
    pub selected_comment: Option<usize>,
}

/// A post rendered to lines
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub lines: Vec<Line<'a>>,
    /// Row of the draft line within `lines`
    pub draft_row: usize,
    /// Row that must stay on screen: the draft while editing, else the
    /// last line of the selected comment
    pub anchor_row: Option<usize>,
    focused: bool,
}

impl<'a> PostCard<'a> {
    /// Build the card for a container
    pub fn build(
        container: &'a PostContainer,
        now: DateTime<Utc>,
        focus: CardFocus,
        theme: &Theme,
    ) -> Self {
        let post = container.post();
        let muted = Style::default().fg(theme.muted);
        let mut lines: Vec<Line<'a>> = Vec::new();

        // Author and published time
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", post.author.initials()),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(post.author.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(post.author.role.as_str(), muted),
            Span::styled(" · ", muted),
            Span::styled(container.published_relative(now), muted),
        ]));
        lines.push(Line::from(Span::styled(
            format!("{} ({})", container.published_formatted(), container.published_iso()),
            muted.add_modifier(Modifier::DIM),
        )));
        lines.push(Line::from(""));

        // Content
        for line in container.rendered_content() {
            let styled = match line.kind {
                LineKind::Text => Span::raw(line.text),
                LineKind::Link => Span::styled(
                    line.text,
                    Style::default().fg(theme.link).add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
                ),
            };
            lines.push(Line::from(styled));
        }
        lines.push(Line::from(""));

        // Comment form
        lines.push(Line::from(Span::styled(FORM_TITLE, Style::default().add_modifier(Modifier::BOLD))));
        let draft = container.draft();
        let draft_row = lines.len();
        let prefix_style = if focus.editing {
            Style::default().fg(theme.focus_border)
        } else {
            muted
        };
        let draft_span = if draft.is_empty() {
            Span::styled(DRAFT_PLACEHOLDER, muted.add_modifier(Modifier::ITALIC))
        } else {
            Span::raw(draft.as_str())
        };
        lines.push(Line::from(vec![Span::styled(DRAFT_PREFIX, prefix_style), draft_span]));

        let submit_style = if container.can_submit() {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            muted.add_modifier(Modifier::DIM)
        };
        lines.push(Line::from(Span::styled(SUBMIT_LABEL, submit_style)));

        if let Some(msg) = draft.validation_message() {
            lines.push(Line::from(Span::styled(
                format!("! {}", msg),
                Style::default().fg(theme.error),
            )));
        }

        // Thread
        if !container.comments().is_empty() {
            lines.push(Line::from(""));
        }
        let mut anchor_row = focus.editing.then_some(draft_row);
        for (i, comment) in container.comments().iter().enumerate() {
            let selected = focus.focused && focus.selected_comment == Some(i);
            lines.extend(CommentRow::new(comment).lines(selected, theme));
            if selected && !focus.editing {
                anchor_row = Some(lines.len() - 1);
            }
        }

        Self {
            lines,
            draft_row,
            anchor_row,
            focused: focus.focused,
        }
    }

    /// Height including borders
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len() + 2).unwrap_or(u16::MAX)
    }

    /// Rows to scroll so the anchor row fits in `visible` inner rows
    pub fn scroll_offset(&self, visible: u16) -> u16 {
        let Some(anchor) = self.anchor_row else {
            return 0;
        };
        let visible = usize::from(visible);
        if visible == 0 || anchor < visible {
            return 0;
        }
        u16::try_from(anchor + 1 - visible).unwrap_or(u16::MAX)
    }

    /// Render the card into `area` scrolled by `scroll` rows; returns the
    /// inner area
    pub fn render(self, frame: &mut Frame, area: Rect, title: String, scroll: u16, theme: &Theme) -> Rect {
        let border = if self.focused {
            theme.focus_border
        } else {
            theme.unfocus_border
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(self.lines).block(block).scroll((scroll, 0)), area);
        inner
    }
}

/// Terminal column width of the first `chars` characters
pub fn display_width(text: &str, chars: usize) -> u16 {
    let head: String = text.chars().take(chars).collect();
    u16::try_from(Span::raw(head).width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_core::post::default_posts;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-06T08:00:00-03:00")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn card_text(card: &PostCard<'_>) -> Vec<String> {
        card.lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_card_shows_author_time_and_content() {
        let container = PostContainer::new(default_posts().remove(0));
        let card = PostCard::build(&container, fixed_now(), CardFocus::default(), &Theme::default());
        let text = card_text(&card);

        assert!(text[0].contains("Felipe Dantas"));
        assert!(text[1].contains("há 3 dias"));
        assert!(text[2].starts_with("3 de maio às 08:00h"));
        assert!(text.iter().any(|l| l == "github.com/feliperbdantas"));
        assert_eq!(text[card.draft_row], format!("{}{}", DRAFT_PREFIX, DRAFT_PLACEHOLDER));
    }

    #[test]
    fn test_card_shows_validation_and_comments() {
        let mut container = PostContainer::new(default_posts().remove(0));
        container.update_draft("first");
        container.submit().unwrap();
        let _ = container.submit();

        let card = PostCard::build(&container, fixed_now(), CardFocus::default(), &Theme::default());
        let text = card_text(&card);

        assert!(text.iter().any(|l| l.contains("O campo 'Comentário' é obrigatório")));
        assert!(text.iter().any(|l| l.ends_with("first")));
    }

    #[test]
    fn test_card_height_counts_borders() {
        let container = PostContainer::new(default_posts().remove(1));
        let card = PostCard::build(&container, fixed_now(), CardFocus::default(), &Theme::default());
        assert_eq!(usize::from(card.height()), card.lines.len() + 2);
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc", 2), 2);
        assert_eq!(display_width("àb", 2), 2);
        assert_eq!(display_width("ação", 4), 4);
        assert_eq!(display_width("日本", 2), 4);
    }

    #[test]
    fn test_scroll_keeps_selected_comment_visible() {
        let mut container = PostContainer::new(default_posts().remove(0));
        for i in 0..30 {
            container.update_draft(format!("comment{}", i));
            container.submit().unwrap();
        }
        let focus = CardFocus {
            focused: true,
            editing: false,
            selected_comment: Some(29),
        };
        let card = PostCard::build(&container, fixed_now(), focus, &Theme::default());
        let anchor = card.anchor_row.unwrap();
        assert_eq!(anchor, card.lines.len() - 1);

        let scroll = card.scroll_offset(10);
        assert_eq!(usize::from(scroll), anchor + 1 - 10);
        assert_eq!(card.scroll_offset(u16::MAX), 0);
    }

    #[test]
    fn test_unfocused_card_does_not_scroll() {
        let container = PostContainer::new(default_posts().remove(0));
        let card = PostCard::build(&container, fixed_now(), CardFocus::default(), &Theme::default());
        assert_eq!(card.anchor_row, None);
        assert_eq!(card.scroll_offset(1), 0);
    }
}
