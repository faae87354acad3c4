//! # CardList Component
//!
//! Vertical list of [`ItemCard`]s used by the Home and Favorites tabs.
//!
//! ## Architecture
//!
//! `CardList` is a transient component (created each frame and for each
//! event) that wraps `&'a mut TabState`, the per-tab selection and offset
//! kept by the navigator. Render and event handling both clamp the state to
//! the current item count. Render also records what it measured:
//!
//! - `cards_per_page`: how many whole cards fit, used for paging between frames
//! - `visible`: ids whose images are on screen, fed to the image board

use std::collections::BTreeSet;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::action::Action;
use crate::core::catalog::{Item, ItemId};
use crate::core::navigation::TabState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::item_card::{CARD_HEIGHT, ItemCard};
use crate::tui::event::TuiEvent;
use crate::tui::images::ImageBoard;

/// Text shown when the list has no items: headline and hint.
pub type EmptyState = (&'static str, &'static str);

pub struct CardList<'a> {
    items: Vec<&'a Item>,
    favorites: &'a BTreeSet<ItemId>,
    state: &'a mut TabState,
    images: Option<&'a ImageBoard>,
    spinner_frame: usize,
    empty_state: EmptyState,
    /// Whole cards that fit the last rendered area.
    pub cards_per_page: usize,
    /// Items whose cards were drawn in the last render.
    pub visible: Vec<ItemId>,
}

impl<'a> CardList<'a> {
    pub fn new(
        items: Vec<&'a Item>,
        favorites: &'a BTreeSet<ItemId>,
        state: &'a mut TabState,
    ) -> Self {
        Self {
            items,
            favorites,
            state,
            images: None,
            spinner_frame: 0,
            empty_state: ("Nothing here", ""),
            cards_per_page: 1,
            visible: Vec::new(),
        }
    }

    /// Show images from `board` when it is enabled.
    pub fn images(mut self, board: &'a ImageBoard, spinner_frame: usize) -> Self {
        if board.enabled() {
            self.images = Some(board);
        }
        self.spinner_frame = spinner_frame;
        self
    }

    pub fn empty_state(mut self, empty_state: EmptyState) -> Self {
        self.empty_state = empty_state;
        self
    }

    /// Page size measured by a previous render.
    pub fn page_size(mut self, cards_per_page: usize) -> Self {
        self.cards_per_page = cards_per_page.max(1);
        self
    }

    fn selected_item(&self) -> Option<&'a Item> {
        self.items.get(self.state.selected).copied()
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let (headline, hint) = self.empty_state;
        let lines = vec![
            Line::from(headline).style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::from(hint).style(Style::default().fg(Color::DarkGray)),
        ];
        let top = area.height.saturating_sub(lines.len() as u16) / 2;
        let area = Rect {
            y: area.y + top,
            height: area.height - top,
            ..area
        };
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

impl Component for CardList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.visible.clear();
        if self.items.is_empty() {
            *self.state = TabState::default();
            self.render_empty(frame, area);
            return;
        }

        self.cards_per_page = ((area.height / CARD_HEIGHT) as usize).max(1);
        clamp_selection(self.state, self.items.len(), self.cards_per_page);

        let scrollable = self.items.len() > self.cards_per_page;
        let cards_area = if scrollable {
            Rect {
                width: area.width.saturating_sub(1),
                ..area
            }
        } else {
            area
        };

        let end = (self.state.offset + self.cards_per_page).min(self.items.len());
        for (row, index) in (self.state.offset..end).enumerate() {
            let item = self.items[index];
            let y = cards_area.y + row as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(cards_area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let card_area = Rect::new(cards_area.x, y, cards_area.width, height);
            let image = self.images.map(|board| board.state(item.id));
            if image.is_some() {
                self.visible.push(item.id);
            }
            ItemCard {
                item,
                favorite: self.favorites.contains(&item.id),
                selected: index == self.state.selected,
                image,
                spinner_frame: self.spinner_frame,
            }
            .render(frame, card_area);
        }

        if scrollable {
            let mut scrollbar_state =
                ScrollbarState::new(self.items.len()).position(self.state.selected);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                area,
                &mut scrollbar_state,
            );
        }
    }
}

impl EventHandler for CardList<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let len = self.items.len();
        let page = self.cards_per_page;
        // The list may have shrunk since the last event (unfavorited items)
        clamp_selection(self.state, len, page);
        match event {
            TuiEvent::CursorUp => move_selection(self.state, len, page, -1),
            TuiEvent::CursorDown => move_selection(self.state, len, page, 1),
            TuiEvent::PageUp => move_selection(self.state, len, page, -(page as isize)),
            TuiEvent::PageDown => move_selection(self.state, len, page, page as isize),
            TuiEvent::Home => move_selection(self.state, len, page, isize::MIN),
            TuiEvent::End => move_selection(self.state, len, page, isize::MAX),
            TuiEvent::Submit => {
                return self.selected_item().map(|item| Action::OpenDetail(item.id));
            }
            TuiEvent::ToggleFavorite => {
                return self
                    .selected_item()
                    .map(|item| Action::ToggleFavorite(item.id));
            }
            _ => {}
        }
        None
    }
}

/// Keep `selected` inside `0..len` and the offset window around it.
pub fn clamp_selection(state: &mut TabState, len: usize, per_page: usize) {
    if len == 0 {
        *state = TabState::default();
        return;
    }
    let per_page = per_page.max(1);
    state.selected = state.selected.min(len - 1);
    if state.selected < state.offset {
        state.offset = state.selected;
    } else if state.selected >= state.offset + per_page {
        state.offset = state.selected + 1 - per_page;
    }
    state.offset = state.offset.min(len.saturating_sub(per_page));
}

/// Move the selection by `delta` rows, saturating at both ends.
pub fn move_selection(state: &mut TabState, len: usize, per_page: usize, delta: isize) {
    if len == 0 {
        return;
    }
    state.selected = state
        .selected
        .saturating_add_signed(delta)
        .min(len - 1);
    clamp_selection(state, len, per_page);
}
