//! # Actions
//!
//! Everything that can happen in Wander becomes an `Action`.
//! User presses Enter on a card? That's `Action::OpenDetail(id)`.
//! User presses Esc on a detail page? That's `Action::Back`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` for the host to carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::catalog::ItemId;
use crate::core::navigation::{BackOutcome, NavOutcome};
use crate::core::route::{Route, Tab};
use crate::core::state::{App, SettingsRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NavigateTo(Route),
    SwitchTab(Tab),
    OpenDetail(ItemId),
    Back,
    ToggleFavorite(ItemId),
    ActivateSetting(SettingsRow),
    ShowAbout,
    Quit,
}

/// What the host must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The visible route changed; views bound to the old route are torn down.
    RouteChanged,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::NavigateTo(route) => route_effect(app.nav.navigate_to(route), route),
        Action::SwitchTab(tab) => route_effect(app.nav.switch_tab(tab), tab.route()),
        Action::OpenDetail(item_id) => route_effect(
            app.nav.navigate_to_detail(item_id),
            Route::Detail { item_id },
        ),
        Action::Back => match app.nav.navigate_back() {
            BackOutcome::Popped(route) => {
                info!("Back to {} (depth {})", route, app.nav.depth());
                Effect::RouteChanged
            }
            BackOutcome::AtRoot => {
                info!("Back at root, exiting");
                Effect::Quit
            }
        },
        Action::ToggleFavorite(item_id) => {
            let title = match app.catalog.get(item_id) {
                Ok(item) => item.title.clone(),
                Err(e) => {
                    warn!("Not toggling favorite: {}", e);
                    app.status_message = e.to_string();
                    return Effect::None;
                }
            };
            if app.favorites.remove(&item_id) {
                app.status_message = format!("Removed from favorites: {title}");
            } else {
                app.favorites.insert(item_id);
                app.status_message = format!("Added to favorites: {title}");
            }
            Effect::None
        }
        Action::ActivateSetting(row) => {
            match row {
                SettingsRow::DarkMode => {
                    app.settings.dark_mode = !app.settings.dark_mode;
                    app.status_message = switch_status(row, app.settings.dark_mode);
                }
                SettingsRow::Notifications => {
                    app.settings.notifications = !app.settings.notifications;
                    app.status_message = switch_status(row, app.settings.notifications);
                }
                SettingsRow::Language | SettingsRow::Privacy | SettingsRow::About => {
                    app.status_message = format!("{}: {}", row.title(), row.subtitle());
                }
            }
            Effect::None
        }
        Action::ShowAbout => {
            app.status_message = format!("Wander v{} · Explore the world", env!("CARGO_PKG_VERSION"));
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn route_effect(outcome: NavOutcome, target: Route) -> Effect {
    match outcome {
        NavOutcome::Unchanged => Effect::None,
        NavOutcome::Pushed | NavOutcome::Switched => {
            info!("Navigated to {} ({:?})", target, outcome);
            Effect::RouteChanged
        }
    }
}

fn switch_status(row: SettingsRow, on: bool) -> String {
    format!("{}: {}", row.title(), if on { "on" } else { "off" })
}
