//! # Routes
//!
//! Every place the app can show. Three top-level tabs plus a detail page
//! parameterized by item id.
//!
//! ```text
//! Route::List ──┐
//! Route::Favorites ├── tab routes (switch semantics)
//! Route::Settings ─┘
//! Route::Detail { item_id } ── pushed on top
//! ```
//!
//! Routes compare structurally and serialize to a restorable JSON form.
//! The short text form (`detail/7`) is used for deep links.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::catalog::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    List,
    Favorites,
    Settings,
    Detail { item_id: ItemId },
}

impl Route {
    /// The tab this route represents, if it is a top-level route.
    pub fn tab(self) -> Option<Tab> {
        match self {
            Route::List => Some(Tab::List),
            Route::Favorites => Some(Tab::Favorites),
            Route::Settings => Some(Tab::Settings),
            Route::Detail { .. } => None,
        }
    }

    pub fn is_tab(self) -> bool {
        self.tab().is_some()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => write!(f, "list"),
            Route::Favorites => write!(f, "favorites"),
            Route::Settings => write!(f, "settings"),
            Route::Detail { item_id } => write!(f, "detail/{item_id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParseError(pub String);

impl fmt::Display for RouteParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown route '{}' (expected list, favorites, settings or detail/<id>)",
            self.0
        )
    }
}

impl std::error::Error for RouteParseError {}

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "list" | "home" => Ok(Route::List),
            "favorites" => Ok(Route::Favorites),
            "settings" => Ok(Route::Settings),
            other => other
                .strip_prefix("detail/")
                .and_then(|id| id.parse::<ItemId>().ok())
                .map(|item_id| Route::Detail { item_id })
                .ok_or_else(|| RouteParseError(trimmed.to_string())),
        }
    }
}

// ============================================================================
// Tabs
// ============================================================================

/// The fixed set of top-level destinations shown in the bottom bar and drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    List,
    Favorites,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::List, Tab::Favorites, Tab::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Tab::List => "Home",
            Tab::Favorites => "Favorites",
            Tab::Settings => "Settings",
        }
    }

    /// Filled glyph when selected, outlined otherwise.
    pub fn icon(self, selected: bool) -> &'static str {
        match (self, selected) {
            (Tab::List, true) => "■",
            (Tab::List, false) => "□",
            (Tab::Favorites, true) => "♥",
            (Tab::Favorites, false) => "♡",
            (Tab::Settings, true) => "●",
            (Tab::Settings, false) => "○",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Tab::List => Route::List,
            Tab::Favorites => Route::Favorites,
            Tab::Settings => Route::Settings,
        }
    }

    /// Position in `Tab::ALL`.
    pub fn index(self) -> usize {
        match self {
            Tab::List => 0,
            Tab::Favorites => 1,
            Tab::Settings => 2,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Route::Detail { item_id: 7 }, Route::Detail { item_id: 7 });
        assert_ne!(Route::Detail { item_id: 7 }, Route::Detail { item_id: 8 });
        assert_ne!(Route::List, Route::Favorites);
    }

    #[test]
    fn test_json_restorable_form() {
        let route = Route::Detail { item_id: 7 };
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, r#"{"route":"detail","item_id":7}"#);
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(back, route);

        let list: Route = serde_json::from_str(r#"{"route":"list"}"#).unwrap();
        assert_eq!(list, Route::List);
    }

    #[test]
    fn test_parse_text_form() {
        assert_eq!("list".parse::<Route>(), Ok(Route::List));
        assert_eq!("Home".parse::<Route>(), Ok(Route::List));
        assert_eq!(" favorites ".parse::<Route>(), Ok(Route::Favorites));
        assert_eq!("settings".parse::<Route>(), Ok(Route::Settings));
        assert_eq!(
            "detail/12".parse::<Route>(),
            Ok(Route::Detail { item_id: 12 })
        );
        assert!("detail/abc".parse::<Route>().is_err());
        assert!("profile".parse::<Route>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for route in [
            Route::List,
            Route::Favorites,
            Route::Settings,
            Route::Detail { item_id: 3 },
        ] {
            assert_eq!(route.to_string().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_tab_mapping() {
        for tab in Tab::ALL {
            assert_eq!(tab.route().tab(), Some(tab));
            assert_eq!(Tab::ALL[tab.index()], tab);
        }
        assert_eq!(Route::Detail { item_id: 1 }.tab(), None);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(Tab::Settings.next(), Tab::List);
        assert_eq!(Tab::List.prev(), Tab::Settings);
        assert_eq!(Tab::List.next(), Tab::Favorites);
    }

    #[test]
    fn test_tab_icons_differ_by_selection() {
        for tab in Tab::ALL {
            assert_ne!(tab.icon(true), tab.icon(false));
        }
        assert_eq!(Tab::List.label(), "Home");
    }
}
