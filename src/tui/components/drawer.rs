//! # Drawer Component
//!
//! Side drawer opened with `m` on tab screens. Header, one entry per tab,
//! then About. Choosing a tab closes the drawer before the switch happens.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DrawerState` lives in `TuiState`
//! - `Drawer` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};

use crate::core::route::Tab;
use crate::tui::event::TuiEvent;

const DRAWER_WIDTH: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Tab(Tab),
    About,
}

const ENTRIES: [Entry; 4] = [
    Entry::Tab(Tab::List),
    Entry::Tab(Tab::Favorites),
    Entry::Tab(Tab::Settings),
    Entry::About,
];

/// Persistent state for the drawer overlay.
#[derive(Debug, Default)]
pub struct DrawerState {
    pub open: bool,
    pub selected: usize,
    pub list_state: ListState,
}

impl DrawerState {
    /// Open with the cursor on `current`.
    pub fn open(&mut self, current: Tab) {
        self.open = true;
        self.selected = current.index();
        self.list_state.select(Some(self.selected));
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a key event, returning a DrawerEvent if the drawer should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<DrawerEvent> {
        match event {
            TuiEvent::Back | TuiEvent::ToggleDrawer => Some(DrawerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(ENTRIES.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::SelectTab(tab) => Some(DrawerEvent::Navigate(*tab)),
            TuiEvent::Submit => ENTRIES.get(self.selected).map(|entry| match entry {
                Entry::Tab(tab) => DrawerEvent::Navigate(*tab),
                Entry::About => DrawerEvent::About,
            }),
            _ => None,
        }
    }
}

/// Events emitted by the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    Navigate(Tab),
    About,
    Dismiss,
}

/// Transient render wrapper for the drawer overlay.
pub struct Drawer<'a> {
    state: &'a mut DrawerState,
    current: Tab,
}

impl<'a> Drawer<'a> {
    pub fn new(state: &'a mut DrawerState, current: Tab) -> Self {
        Self { state, current }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let panel = Rect {
            width: DRAWER_WIDTH.min(area.width),
            ..area
        };
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .title_bottom(Line::from(" Enter Select  Esc Close ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(inner);

        let header = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Wander",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Explore the world",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(header, header_area);

        let items: Vec<ListItem> = ENTRIES
            .iter()
            .map(|entry| {
                let (icon, label, is_current) = match entry {
                    Entry::Tab(tab) => (
                        tab.icon(*tab == self.current),
                        tab.label(),
                        *tab == self.current,
                    ),
                    Entry::About => ("ⓘ", "About", false),
                };
                let style = if is_current {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{icon}  "), style),
                    Span::styled(label, style),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
        self.state.list_state.select(Some(self.state.selected));
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}
