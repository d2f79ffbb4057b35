//! Layout management

use ratatui::prelude::*;

/// Width of the profile sidebar in columns
pub const SIDEBAR_WIDTH: u16 = 30;

/// Screen regions of the feed page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub sidebar: Option<Rect>,
    pub main: Rect,
    pub status: Rect,
}

/// Layout manager
#[derive(Debug, Clone, Copy)]
pub struct LayoutManager {
    show_sidebar: bool,
}

impl LayoutManager {
    /// Create a new layout manager
    pub fn new(show_sidebar: bool) -> Self {
        Self { show_sidebar }
    }

    /// Split the screen into header, sidebar, post column and status bar.
    /// The sidebar is dropped when the terminal is too narrow to fit both.
    pub fn split(&self, area: Rect) -> PageLayout {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let body = rows[1];
        let (sidebar, main) = if self.show_sidebar && body.width >= SIDEBAR_WIDTH * 2 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
                .split(body);
            (Some(cols[0]), cols[1])
        } else {
            (None, body)
        };

        PageLayout {
            header: rows[0],
            sidebar,
            main,
            status: rows[2],
        }
    }
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new(true)
    }
}

/// A rectangle centered in `r`, sized in percent
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_sidebar() {
        let layout = LayoutManager::new(true).split(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.sidebar.map(|s| s.width), Some(SIDEBAR_WIDTH));
        assert_eq!(layout.main.width, 100 - SIDEBAR_WIDTH);
        assert_eq!(layout.main.height, 28);
    }

    #[test]
    fn test_sidebar_hidden_when_disabled_or_narrow() {
        assert!(LayoutManager::new(false).split(Rect::new(0, 0, 100, 30)).sidebar.is_none());
        let narrow = LayoutManager::new(true).split(Rect::new(0, 0, 40, 30));
        assert!(narrow.sidebar.is_none());
        assert_eq!(narrow.main.width, 40);
    }
}
