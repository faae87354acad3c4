//! # Settings Screen
//!
//! Grouped preference rows. Switch rows (Dark Mode, Push Notifications)
//! toggle on Enter or Space; the other rows report their value in the
//! status line. Selection is the Settings tab's `TabState`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::navigation::TabState;
use crate::core::state::{Settings, SettingsRow};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::card_list::{clamp_selection, move_selection};
use crate::tui::event::TuiEvent;

const ROW_HEIGHT: u16 = 2;
const HEADER_HEIGHT: u16 = 2;

pub struct SettingsScreen<'a> {
    settings: &'a Settings,
    state: &'a mut TabState,
}

impl<'a> SettingsScreen<'a> {
    pub fn new(settings: &'a Settings, state: &'a mut TabState) -> Self {
        Self { settings, state }
    }

    fn selected_row(&self) -> Option<SettingsRow> {
        SettingsRow::ALL.get(self.state.selected).copied()
    }

    fn render_row(&self, frame: &mut Frame, area: Rect, row: SettingsRow, selected: bool) {
        let [text_area, control_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(8)]).areas(area);

        let marker = if selected { "▌ " } else { "  " };
        let title_style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(row.title(), title_style),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(row.subtitle(), Style::default().fg(Color::DarkGray)),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), text_area);

        let control = match row.switch_value(self.settings) {
            Some(true) => Span::styled(" ON  ●", Style::default().fg(Color::Green)),
            Some(false) => Span::styled(" ○ OFF", Style::default().fg(Color::DarkGray)),
            None => Span::styled("     ›", Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(Paragraph::new(Line::from(control)), control_area);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Header(&'static str),
    Row(SettingsRow),
}

/// Rows interleaved with section headers, as (y, entry) in content space.
fn layout_entries() -> Vec<(u16, Entry)> {
    let mut entries = Vec::new();
    let mut y = 0;
    let mut section = "";
    for row in SettingsRow::ALL {
        if row.section() != section {
            section = row.section();
            entries.push((y, Entry::Header(section)));
            y += HEADER_HEIGHT;
        }
        entries.push((y, Entry::Row(row)));
        y += ROW_HEIGHT;
    }
    entries
}

impl Component for SettingsScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let len = SettingsRow::ALL.len();
        clamp_selection(self.state, len, len);
        let selected = self.selected_row();

        let entries = layout_entries();
        let selected_bottom = entries
            .iter()
            .find(|(_, entry)| Some(*entry) == selected.map(Entry::Row))
            .map_or(0, |(y, _)| y + ROW_HEIGHT);
        let scroll = selected_bottom.saturating_sub(area.height);

        for (y, entry) in entries {
            let Some(top) = y.checked_sub(scroll) else {
                continue;
            };
            if top >= area.height {
                break;
            }
            let height = (area.height - top).min(ROW_HEIGHT);
            let rect = Rect::new(area.x, area.y + top, area.width, height);
            match entry {
                Entry::Header(section) => frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        section.to_uppercase(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))),
                    rect,
                ),
                Entry::Row(row) => self.render_row(frame, rect, row, Some(row) == selected),
            }
        }
    }
}

impl EventHandler for SettingsScreen<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let len = SettingsRow::ALL.len();
        clamp_selection(self.state, len, len);
        match event {
            TuiEvent::CursorUp => move_selection(self.state, len, len, -1),
            TuiEvent::CursorDown => move_selection(self.state, len, len, 1),
            TuiEvent::Home | TuiEvent::PageUp => move_selection(self.state, len, len, isize::MIN),
            TuiEvent::End | TuiEvent::PageDown => move_selection(self.state, len, len, isize::MAX),
            TuiEvent::Submit | TuiEvent::ToggleFavorite => {
                return self.selected_row().map(Action::ActivateSetting);
            }
            _ => {}
        }
        None
    }
}
