//! # Application State
//!
//! Core business state for Wander. Domain data only, no TUI types.
//! Presentation state (drawer, images, scroll widgets) lives in `tui`.
//!
//! ```text
//! App
//! ├── catalog: Arc<Catalog>        // read-only items
//! ├── nav: Navigator               // back stack + per-tab state
//! ├── favorites: BTreeSet<ItemId>  // shared favorites set
//! ├── settings: Settings           // session-only switches
//! └── status_message: String       // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::core::catalog::{Catalog, Item, ItemId};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Navigator;

/// Session-only preference switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub dark_mode: bool,
    pub notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
        }
    }
}

/// Rows on the settings screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    DarkMode,
    Notifications,
    Language,
    Privacy,
    About,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 5] = [
        SettingsRow::DarkMode,
        SettingsRow::Notifications,
        SettingsRow::Language,
        SettingsRow::Privacy,
        SettingsRow::About,
    ];

    pub fn section(self) -> &'static str {
        match self {
            SettingsRow::DarkMode => "Appearance",
            SettingsRow::Notifications => "Notifications",
            SettingsRow::Language | SettingsRow::Privacy => "General",
            SettingsRow::About => "About",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SettingsRow::DarkMode => "Dark Mode",
            SettingsRow::Notifications => "Push Notifications",
            SettingsRow::Language => "Language",
            SettingsRow::Privacy => "Privacy & Security",
            SettingsRow::About => "About App",
        }
    }

    pub fn subtitle(self) -> String {
        match self {
            SettingsRow::DarkMode => "Use dark theme".to_string(),
            SettingsRow::Notifications => "Receive updates and alerts".to_string(),
            SettingsRow::Language => "English (US)".to_string(),
            SettingsRow::Privacy => "Manage your privacy settings".to_string(),
            SettingsRow::About => format!("Version {}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Current switch value, or `None` for clickable rows.
    pub fn switch_value(self, settings: &Settings) -> Option<bool> {
        match self {
            SettingsRow::DarkMode => Some(settings.dark_mode),
            SettingsRow::Notifications => Some(settings.notifications),
            _ => None,
        }
    }
}

pub struct App {
    pub catalog: Arc<Catalog>,
    pub nav: Navigator,
    pub favorites: BTreeSet<ItemId>,
    pub settings: Settings,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let favorites = catalog
            .all()
            .iter()
            .filter(|item| item.favorite)
            .map(|item| item.id)
            .collect();
        Self {
            catalog,
            nav: Navigator::new(),
            favorites,
            settings: Settings::default(),
            status_message: String::new(),
        }
    }

    pub fn from_config(catalog: Arc<Catalog>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(catalog);
        app.nav = Navigator::starting_at(config.start_route);
        app.settings = config.settings;
        app
    }

    pub fn is_favorite(&self, id: ItemId) -> bool {
        self.favorites.contains(&id)
    }

    /// Favorite items in catalog order.
    pub fn favorite_items(&self) -> Vec<&Item> {
        favorites_in_order(&self.catalog, &self.favorites)
    }
}

/// Items of `catalog` that are in `favorites`, in catalog order.
pub fn favorites_in_order<'a>(catalog: &'a Catalog, favorites: &BTreeSet<ItemId>) -> Vec<&'a Item> {
    catalog
        .all()
        .iter()
        .filter(|item| favorites.contains(&item.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::route::Route;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.nav.current(), Route::List);
        assert!(app.favorites.is_empty());
        assert_eq!(app.settings, Settings::default());
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_favorites_seeded_from_items() {
        let mut items = Catalog::seed().all().to_vec();
        items[4].favorite = true;
        items[1].favorite = true;
        let app = App::new(Arc::new(Catalog::new(items).unwrap()));
        let ids: Vec<ItemId> = app.favorite_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn test_settings_rows() {
        let settings = Settings::default();
        assert_eq!(SettingsRow::DarkMode.switch_value(&settings), Some(false));
        assert_eq!(SettingsRow::Notifications.switch_value(&settings), Some(true));
        assert_eq!(SettingsRow::Language.switch_value(&settings), None);
        assert!(SettingsRow::About.subtitle().starts_with("Version "));
    }
}
