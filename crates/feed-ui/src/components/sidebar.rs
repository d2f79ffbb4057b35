//! Profile sidebar

use crate::theme::Theme;
use feed_core::config::ProfileConfig;
use feed_core::post::Author;
use ratatui::{prelude::*, widgets::*};

/// Sidebar lines for the viewer profile
pub fn sidebar_lines<'a>(profile: &'a ProfileConfig, theme: &Theme) -> Vec<Line<'a>> {
    let initials = Author::new(profile.name.as_str(), "", "").initials();

    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("[{}]", initials),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            profile.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(profile.role.as_str(), Style::default().fg(theme.muted)))
            .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            profile.avatar_url.as_str(),
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled("✎ Editar seu perfil", Style::default().fg(theme.accent)))
            .alignment(Alignment::Center),
    ]
}

/// Render the sidebar
pub fn render_sidebar(frame: &mut Frame, area: Rect, profile: &ProfileConfig, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.unfocus_border));
    frame.render_widget(
        Paragraph::new(sidebar_lines(profile, theme))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
