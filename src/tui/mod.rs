//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (images loading): draws every ~80ms so spinners move.
//! - **Idle**: sleeps up to 500ms, only redraws on input, resize, or when a
//!   finished image fetch changed what is on screen.
//!
//! ## Image lifetime
//!
//! After each draw the loop hands the ids whose images were on screen to
//! the [`ImageBoard`]. Fetches for anything else are aborted. A route change
//! drops every fetch, so each screen starts with a clean board.
//!
//! Detail pages share one `ScrollViewState`. Its offset is parked per stack
//! entry on the way out and put back when back returns to that entry.

mod component;
mod components;
mod event;
mod images;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Position;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::ItemId;
use crate::core::navigation::Navigator;
use crate::core::route::Route;
use crate::core::state::{App, favorites_in_order};
use crate::images::ImageFetcher;
use crate::tui::component::EventHandler;
use crate::tui::components::{CardList, DetailScreen, DrawerEvent, DrawerState, SettingsScreen};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::images::ImageBoard;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub drawer: DrawerState,
    pub detail_scroll: ScrollViewState,
    /// Detail offsets by stack index, for pages below the top
    detail_offsets: Vec<Position>,
    pub images: ImageBoard,
    // Measured during the last draw
    pub visible_images: Vec<ItemId>,
    pub cards_per_page: usize,
}

impl TuiState {
    pub fn new(images: ImageBoard) -> Self {
        Self {
            drawer: DrawerState::default(),
            detail_scroll: ScrollViewState::default(),
            detail_offsets: Vec::new(),
            images,
            visible_images: Vec::new(),
            cards_per_page: 1,
        }
    }

    /// Tear down everything bound to the previous route, which sat at
    /// `left_depth` in the stack, and set up scroll for the new one.
    fn route_changed(&mut self, left: Route, left_depth: usize, nav: &Navigator) {
        self.drawer.close();
        self.images.cancel_all();
        self.visible_images.clear();

        if matches!(left, Route::Detail { .. }) {
            let index = left_depth.saturating_sub(1);
            if self.detail_offsets.len() <= index {
                self.detail_offsets.resize(index + 1, Position::default());
            }
            self.detail_offsets[index] = self.detail_scroll.offset();
        }

        // Entries above the new top were popped
        let depth = nav.depth();
        self.detail_offsets.truncate(depth);

        self.detail_scroll = ScrollViewState::default();
        if let Route::Detail { .. } = nav.current() {
            if let Some(offset) = self.detail_offsets.get(depth.saturating_sub(1)) {
                self.detail_scroll.set_offset(*offset);
            }
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(mut app: App, fetcher: Option<Arc<dyn ImageFetcher>>) -> std::io::Result<()> {
    let mut tui = TuiState::new(ImageBoard::new(fetcher));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    info!("Opened at {} (depth {})", app.nav.current(), app.nav.depth());

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = tui.images.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            tui.images.sync(&tui.visible_images, &app.catalog);
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(&mut app, &mut tui, event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Finished image fetches
        if tui.images.drain() {
            needs_redraw = true;
        }
    }

    tui.images.cancel_all();
    info!("Exiting at depth {}", app.nav.depth());

    ratatui::restore();
    Ok(())
}

/// Route one input event: global keys first, then the drawer when open,
/// then the active screen.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    debug!("Dispatching {:?} on {}", event, app.nav.current());

    match event {
        // Resize just needs a redraw (already flagged by the loop)
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit | TuiEvent::Quit => return apply(app, tui, Action::Quit),
        _ => {}
    }

    // While the drawer is open it takes every event
    if tui.drawer.open {
        let Some(drawer_event) = tui.drawer.handle_event(&event) else {
            return Effect::None;
        };
        // Close first so the switch lands on an unobstructed screen
        tui.drawer.close();
        return match drawer_event {
            DrawerEvent::Navigate(tab) => apply(app, tui, Action::SwitchTab(tab)),
            DrawerEvent::About => apply(app, tui, Action::ShowAbout),
            DrawerEvent::Dismiss => Effect::None,
        };
    }

    let chrome = app.nav.shows_chrome();
    let action = match event {
        TuiEvent::Back => Some(Action::Back),
        // Tabs and drawer live in the chrome, which Detail hides
        TuiEvent::SelectTab(tab) if chrome => Some(Action::SwitchTab(tab)),
        TuiEvent::NextTab if chrome => Some(Action::SwitchTab(app.nav.current_tab().next())),
        TuiEvent::PrevTab if chrome => Some(Action::SwitchTab(app.nav.current_tab().prev())),
        TuiEvent::ToggleDrawer => {
            if chrome {
                tui.drawer.open(app.nav.current_tab());
            }
            None
        }
        TuiEvent::SelectTab(_) | TuiEvent::NextTab | TuiEvent::PrevTab => None,
        _ => screen_event(app, tui, &event),
    };

    match action {
        Some(action) => apply(app, tui, action),
        None => Effect::None,
    }
}

/// Let the active screen turn `event` into an action. Screens mutate only
/// their own view state (tab selection, detail scroll).
fn screen_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let App {
        catalog,
        nav,
        favorites,
        settings,
        ..
    } = app;

    match nav.current() {
        Route::List => CardList::new(catalog.all().iter().collect(), favorites, nav.tab_state_mut())
            .page_size(tui.cards_per_page)
            .handle_event(event),
        Route::Favorites => CardList::new(
            favorites_in_order(catalog, favorites),
            favorites,
            nav.tab_state_mut(),
        )
        .page_size(tui.cards_per_page)
        .handle_event(event),
        Route::Settings => SettingsScreen::new(settings, nav.tab_state_mut()).handle_event(event),
        Route::Detail { item_id } => DetailScreen::new(
            item_id,
            catalog.get(item_id).ok(),
            favorites.contains(&item_id),
            &mut tui.detail_scroll,
        )
        .handle_event(event),
    }
}

fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let left = app.nav.current();
    let left_depth = app.nav.depth();
    let effect = update(app, action);
    if effect == Effect::RouteChanged {
        tui.route_changed(left, left_depth, &app.nav);
    }
    effect
}
