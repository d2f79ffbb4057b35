//! Application state and main app structure

use anyhow::Result;
use chrono::{DateTime, Utc};
use feed_core::config::{Config, ProfileConfig};
use feed_core::Feed;
use crossterm::event::KeyEvent;
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;
use tracing::debug;

use crate::components::{render_header, render_sidebar, CardFocus, CommentRow, PostCard};
use crate::components::post_card::{display_width, DRAFT_PREFIX};
use crate::events::{Event, EventSource};
use crate::input::{Action, InputHandler};
use crate::layout::{centered_rect, LayoutManager};
use crate::theme::Theme;
use crate::tui;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Browsing posts and comments
    #[default]
    Normal,
    /// Typing in the comment form of the current post
    Insert,
    /// Help mode
    Help,
}

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Status message
    pub message: Option<String>,
    /// Should quit
    pub should_quit: bool,
    /// Index of the focused post
    pub current_post: usize,
    /// Highlighted comment within the focused post
    pub selected_comment: Option<usize>,
    /// Cursor position in the draft, in characters
    pub editor_cursor: usize,
}

impl AppState {
    /// Create a new app state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

/// Main application
pub struct App {
    /// Application state
    pub state: AppState,
    /// Posts and their comment threads
    feed: Feed,
    /// Viewer profile for the sidebar
    profile: ProfileConfig,
    theme: Theme,
    layout: LayoutManager,
    input: InputHandler,
    tick_rate: Duration,
    /// Reference time for relative timestamps; wall clock when unset
    pinned_now: Option<DateTime<Utc>>,
}

impl App {
    /// Create a new app for a feed
    pub fn new(feed: Feed, config: &Config) -> Self {
        Self {
            state: AppState::new(),
            feed,
            profile: config.profile.clone(),
            theme: Theme::from_name(&config.ui.theme),
            layout: LayoutManager::new(config.ui.show_sidebar),
            input: InputHandler::new(),
            tick_rate: config.ui.tick_rate(),
            pinned_now: None,
        }
    }

    /// Pin the reference time used for relative timestamps
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.pinned_now = Some(now);
        self
    }

    /// The feed being shown
    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    fn now(&self) -> DateTime<Utc> {
        self.pinned_now.unwrap_or_else(Utc::now)
    }

    /// Run in the real terminal until the user quits
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = tui::init()?;
        let result = self.run_loop(&mut terminal);
        tui::restore()?;
        result
    }

    /// Main loop over any backend
    pub fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let events = EventSource::new(self.tick_rate);
        loop {
            self.draw(terminal)?;

            match events.next()? {
                Event::Input(key) => self.handle_input(key)?,
                Event::Resize(w, h) => debug!("Terminal resized to {}x{}", w, h),
                Event::Tick => {}
            }

            if self.state.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Draw the UI
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| self.render(frame))?;
        Ok(())
    }

    /// Handle keyboard input
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(action) = self.input.map(self.state.mode, key) {
            self.apply(action);
        }
        Ok(())
    }

    /// Apply an action to the state
    pub fn apply(&mut self, action: Action) {
        if self.state.mode == AppMode::Normal {
            self.state.clear_message();
        }

        match action {
            Action::Quit => self.state.should_quit = true,
            Action::ShowHelp => self.state.mode = AppMode::Help,
            Action::CloseHelp => self.state.mode = AppMode::Normal,
            Action::NextPost => self.move_post(1),
            Action::PrevPost => self.move_post(-1),
            Action::NextComment => self.move_comment(1),
            Action::PrevComment => self.move_comment(-1),
            Action::StartComment => self.start_comment(),
            Action::DeleteComment => self.delete_selected_comment(),
            Action::InsertChar(c) => self.edit_draft(|text, cursor| {
                let byte_pos = char_to_byte_pos(text, *cursor);
                text.insert(byte_pos, c);
                *cursor += 1;
            }),
            Action::Backspace => self.edit_draft(|text, cursor| {
                if *cursor > 0 {
                    *cursor -= 1;
                    let byte_pos = char_to_byte_pos(text, *cursor);
                    text.remove(byte_pos);
                }
            }),
            Action::DeleteForward => self.edit_draft(|text, cursor| {
                if *cursor < text.chars().count() {
                    let byte_pos = char_to_byte_pos(text, *cursor);
                    text.remove(byte_pos);
                }
            }),
            Action::CursorLeft => {
                self.state.editor_cursor = self.state.editor_cursor.saturating_sub(1);
            }
            Action::CursorRight => {
                self.state.editor_cursor = (self.state.editor_cursor + 1).min(self.draft_len());
            }
            Action::CursorHome => self.state.editor_cursor = 0,
            Action::CursorEnd => self.state.editor_cursor = self.draft_len(),
            Action::Submit => self.submit_comment(),
            Action::LeaveForm => self.state.mode = AppMode::Normal,
        }
    }

    fn draft_len(&self) -> usize {
        self.feed
            .get(self.state.current_post)
            .map(|c| c.draft().as_str().chars().count())
            .unwrap_or(0)
    }

    fn move_post(&mut self, delta: isize) {
        if self.feed.is_empty() {
            return;
        }
        let last = self.feed.len() - 1;
        let next = self.state.current_post.saturating_add_signed(delta).min(last);
        if next != self.state.current_post {
            self.state.current_post = next;
            self.state.selected_comment = None;
        }
    }

    fn move_comment(&mut self, delta: isize) {
        let count = self
            .feed
            .get(self.state.current_post)
            .map(|c| c.comments().len())
            .unwrap_or(0);
        if count == 0 {
            self.state.selected_comment = None;
            self.state.set_message("Nenhum comentário neste post");
            return;
        }

        self.state.selected_comment = Some(match self.state.selected_comment {
            None if delta < 0 => count - 1,
            None => 0,
            Some(i) => i.saturating_add_signed(delta).min(count - 1),
        });
    }

    fn start_comment(&mut self) {
        if self.feed.is_empty() {
            return;
        }
        self.state.mode = AppMode::Insert;
        self.state.editor_cursor = self.draft_len();
    }

    /// Edit the focused draft; every edit goes through `update_draft`,
    /// which also clears a previous validation failure
    fn edit_draft<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut String, &mut usize),
    {
        let Some(container) = self.feed.get_mut(self.state.current_post) else {
            return;
        };
        let mut text = container.draft().as_str().to_string();
        let mut cursor = self.state.editor_cursor.min(text.chars().count());
        edit(&mut text, &mut cursor);
        container.update_draft(text);
        self.state.editor_cursor = cursor;
        self.state.clear_message();
    }

    fn submit_comment(&mut self) {
        let Some(container) = self.feed.get_mut(self.state.current_post) else {
            return;
        };

        match container.submit() {
            Ok(()) => {
                self.state.editor_cursor = 0;
                self.state.mode = AppMode::Normal;
                self.state.set_message("Comentário publicado");
            }
            Err(err) => {
                let msg = err
                    .validation_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                self.state.set_message(msg);
            }
        }
    }

    fn delete_selected_comment(&mut self) {
        let Some(selected) = self.state.selected_comment else {
            self.state.set_message("Selecione um comentário com J/K");
            return;
        };
        let Some(container) = self.feed.get_mut(self.state.current_post) else {
            return;
        };
        let Some(value) = container.comments().get(selected).cloned() else {
            self.state.selected_comment = None;
            return;
        };

        let mut removed = false;
        CommentRow::new(&value).request_removal(|v| removed = container.delete_comment(v));

        let remaining = container.comments().len();
        self.state.selected_comment = match remaining {
            0 => None,
            n => Some(selected.min(n - 1)),
        };
        if removed {
            self.state.set_message("Comentário excluído");
        }
    }

    // Rendering

    /// Render the whole page into a frame
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let page = self.layout.split(area);

        render_header(frame, page.header, &self.theme);
        if let Some(sidebar) = page.sidebar {
            render_sidebar(frame, sidebar, &self.profile, &self.theme);
        }
        self.render_posts(frame, page.main);
        self.render_status_bar(frame, page.status);

        if self.state.mode == AppMode::Help {
            render_help(frame, area);
        }
    }

    /// Cards are stacked from the focused post downwards
    fn render_posts(&self, frame: &mut Frame, area: Rect) {
        if self.feed.is_empty() {
            frame.render_widget(
                Paragraph::new("Nenhum post para exibir").block(Block::default().borders(Borders::ALL)),
                area,
            );
            return;
        }

        let now = self.now();
        let mut y = area.y;
        let bottom = area.y + area.height;

        for (index, container) in self.feed.containers().iter().enumerate().skip(self.state.current_post) {
            if y >= bottom {
                break;
            }
            let focused = index == self.state.current_post;
            let focus = CardFocus {
                focused,
                editing: focused && self.state.mode == AppMode::Insert,
                selected_comment: if focused { self.state.selected_comment } else { None },
            };

            let card = PostCard::build(container, now, focus, &self.theme);
            let height = card.height().min(bottom - y);
            let card_area = Rect::new(area.x, y, area.width, height);
            let draft_row = card.draft_row;
            let scroll = card.scroll_offset(height.saturating_sub(2));
            let title = format!(" #{} ", container.id());
            let inner = card.render(frame, card_area, title, scroll, &self.theme);

            if focus.editing {
                let row = u16::try_from(draft_row)
                    .unwrap_or(u16::MAX)
                    .saturating_sub(scroll);
                let text = container.draft().as_str();
                let x = inner
                    .x
                    .saturating_add(display_width(DRAFT_PREFIX, usize::MAX))
                    .saturating_add(display_width(text, self.state.editor_cursor))
                    .min(inner.x + inner.width.saturating_sub(1));
                let cursor_y = inner.y.saturating_add(row);
                if cursor_y < inner.y + inner.height {
                    frame.set_cursor_position((x, cursor_y));
                }
            }

            y = y.saturating_add(height);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode = match self.state.mode {
            AppMode::Normal => "NORMAL",
            AppMode::Insert => "INSERT",
            AppMode::Help => "HELP",
        };

        let text = self.state.message.clone().unwrap_or_else(|| {
            format!(
                " {} | post {}/{} | {} comentários ",
                mode,
                (self.state.current_post + 1).min(self.feed.len()),
                self.feed.len(),
                self.feed.comment_count(),
            )
        });

        frame.render_widget(
            Paragraph::new(text).style(Style::default().bg(self.theme.status_bg).fg(Color::White)),
            area,
        );
    }
}

/// Convert character position to byte position
fn char_to_byte_pos(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

fn render_help(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled("feedview", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("Navegação", Style::default().fg(Color::Yellow))),
        Line::from("  j/k         Próximo/anterior post"),
        Line::from("  J/K, Tab    Próximo/anterior comentário"),
        Line::from(""),
        Line::from(Span::styled("Comentários", Style::default().fg(Color::Yellow))),
        Line::from("  c / Enter   Escrever comentário"),
        Line::from("  Enter       Publicar (no formulário)"),
        Line::from("  Esc         Sair do formulário"),
        Line::from("  x           Excluir comentário selecionado"),
        Line::from(""),
        Line::from(Span::styled("Outros", Style::default().fg(Color::Yellow))),
        Line::from("  q           Sair"),
        Line::from("  ?           Mostrar esta ajuda"),
        Line::from(""),
        Line::from(Span::styled("Pressione qualquer tecla para fechar", Style::default().fg(Color::DarkGray))),
    ];

    let help_area = centered_rect(50, 70, area);
    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .title("Ajuda")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        help_area,
    );
}
