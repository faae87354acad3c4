use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::core::route::Tab;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Always handled, whatever screen is up
    ForceQuit,
    Quit,
    Resize,

    // Navigation
    Back,
    SelectTab(Tab),
    NextTab,
    PrevTab,
    ToggleDrawer,

    // Screen-local
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    Home,
    End,
    Submit,
    ToggleFavorite,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !matches!(event::poll(timeout), Ok(true)) {
        return None;
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            log::warn!("Failed to read terminal event: {}", e);
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) => Some(TuiEvent::Back),
                (_, KeyCode::Char('h')) => Some(TuiEvent::Back),
                (_, KeyCode::Char('1')) => Some(TuiEvent::SelectTab(Tab::List)),
                (_, KeyCode::Char('2')) => Some(TuiEvent::SelectTab(Tab::Favorites)),
                (_, KeyCode::Char('3')) => Some(TuiEvent::SelectTab(Tab::Settings)),
                (_, KeyCode::Tab) => Some(TuiEvent::NextTab),
                (_, KeyCode::BackTab) => Some(TuiEvent::PrevTab),
                (_, KeyCode::Char('m')) => Some(TuiEvent::ToggleDrawer),
                (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
                (_, KeyCode::Home | KeyCode::Char('g')) => Some(TuiEvent::Home),
                (_, KeyCode::End | KeyCode::Char('G')) => Some(TuiEvent::End),
                (_, KeyCode::Enter | KeyCode::Right | KeyCode::Char('l')) => {
                    Some(TuiEvent::Submit)
                }
                (_, KeyCode::Char('f') | KeyCode::Char(' ')) => Some(TuiEvent::ToggleFavorite),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
