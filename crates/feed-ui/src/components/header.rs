//! Page header

use crate::theme::Theme;
use ratatui::{prelude::*, widgets::*};

/// Title shown in the header bar
pub const HEADER_TITLE: &str = "◆ Ignite Feed";

/// Render the header bar
pub fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(HEADER_TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
        area,
    );
}
