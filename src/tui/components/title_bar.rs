//! # TitleBar Component
//!
//! Top bar on tab screens: route title on the left, the latest status
//! message in the middle, the drawer hint on the right.
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.nav.title(&app.catalog), &app.status_message);
//! title_bar.render(frame, area);
//! ```
//!
//! On narrow terminals the status is dropped first, then the menu hint.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const MENU_HINT: &str = " [m] Menu ";

pub struct TitleBar<'a> {
    /// Current route title ("Home", "Favorites", "Settings").
    pub title: String,
    /// Transient status, empty for none.
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: String, status_message: &'a str) -> Self {
        Self {
            title,
            status_message,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default().bg(Color::Rgb(30, 30, 40)).fg(Color::White);
        frame.render_widget(Paragraph::new("").style(bar_style), area);

        let title_width = self.title.chars().count() as u16 + 2;
        let hint_width = if area.width > title_width + MENU_HINT.len() as u16 {
            MENU_HINT.len() as u16
        } else {
            0
        };
        let [title_area, status_area, hint_area] = Layout::horizontal([
            Constraint::Length(title_width),
            Constraint::Min(0),
            Constraint::Length(hint_width),
        ])
        .areas(area);

        frame.render_widget(
            Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            title_area,
        );

        if !self.status_message.is_empty() && status_area.width > 4 {
            frame.render_widget(
                Line::from(vec![
                    Span::styled("│ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(self.status_message, Style::default().fg(Color::Yellow)),
                ]),
                status_area,
            );
        }

        if hint_width > 0 {
            frame.render_widget(
                Span::styled(MENU_HINT, Style::default().fg(Color::DarkGray)),
                hint_area,
            );
        }
    }
}
