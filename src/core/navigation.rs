//! # Navigation
//!
//! The back stack and its transitions. Pure data, no UI.
//!
//! ```text
//! [List]                        initial
//! [List, Favorites]             navigate_to(Favorites)   switch
//! [List, Favorites, Detail(3)]  navigate_to_detail(3)    push
//! [List, Favorites]             navigate_back()          pop
//! [List]                        navigate_to(List)        switch
//! [List]                        navigate_back()          AtRoot (host exits)
//! ```
//!
//! Tab routes use switch semantics: the stack is popped back to the root,
//! the leaving tab's `TabState` is saved and the entering tab's state is
//! restored. Detail routes are always pushed. The root (`List`) is never
//! popped, so the stack is never empty.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::core::catalog::{Catalog, ItemId};
use crate::core::route::{Route, Tab};

/// Per-tab view state kept across tab switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabState {
    /// Selected row in the tab's list.
    pub selected: usize,
    /// First visible row.
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Pushed,
    Switched,
    /// Target tab was already current.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Top entry removed; carries the newly visible route.
    Popped(Route),
    /// Only the root remains. The host decides whether to exit.
    AtRoot,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
    /// State of the tab currently underneath the top of the stack.
    live: TabState,
    saved: BTreeMap<Tab, TabState>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::List],
            live: TabState::default(),
            saved: BTreeMap::new(),
        }
    }

    /// A navigator that opens on `route`, as a deep link would.
    pub fn starting_at(route: Route) -> Self {
        let mut nav = Self::new();
        nav.navigate_to(route);
        nav
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::List)
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The tab the current route belongs to (the nearest tab route below the top).
    pub fn current_tab(&self) -> Tab {
        self.stack
            .iter()
            .rev()
            .find_map(|route| route.tab())
            .unwrap_or(Tab::List)
    }

    pub fn tab_state(&self) -> &TabState {
        &self.live
    }

    pub fn tab_state_mut(&mut self) -> &mut TabState {
        &mut self.live
    }

    /// State saved for a tab that is not current.
    pub fn saved_state(&self, tab: Tab) -> Option<&TabState> {
        self.saved.get(&tab)
    }

    pub fn navigate_to(&mut self, route: Route) -> NavOutcome {
        match route {
            Route::List => self.switch_tab(Tab::List),
            Route::Favorites => self.switch_tab(Tab::Favorites),
            Route::Settings => self.switch_tab(Tab::Settings),
            Route::Detail { item_id } => self.navigate_to_detail(item_id),
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) -> NavOutcome {
        if self.current() == tab.route() {
            return NavOutcome::Unchanged;
        }

        let leaving = self.current_tab();
        self.saved.insert(leaving, self.live);

        self.stack.truncate(1);
        if tab.route() != self.stack[0] {
            self.stack.push(tab.route());
        }
        self.live = self.saved.remove(&tab).unwrap_or_default();
        NavOutcome::Switched
    }

    /// Always a true push, even for the item already on top.
    pub fn navigate_to_detail(&mut self, item_id: ItemId) -> NavOutcome {
        self.stack.push(Route::Detail { item_id });
        NavOutcome::Pushed
    }

    pub fn navigate_back(&mut self) -> BackOutcome {
        if self.stack.len() <= 1 {
            return BackOutcome::AtRoot;
        }

        let popped = self.stack.pop().unwrap_or(Route::List);
        if let Some(tab) = popped.tab() {
            self.saved.insert(tab, self.live);
            self.live = self.saved.remove(&self.current_tab()).unwrap_or_default();
        }
        BackOutcome::Popped(self.current())
    }

    // ------------------------------------------------------------------------
    // Presentation
    // ------------------------------------------------------------------------

    /// Title for the top bar.
    pub fn title(&self, catalog: &Catalog) -> String {
        match self.current() {
            Route::Detail { item_id } => catalog
                .get(item_id)
                .map(|item| item.title.clone())
                .unwrap_or_else(|_| "Item not found".to_string()),
            route => route
                .tab()
                .map(|tab| tab.label().to_string())
                .unwrap_or_else(|| "Wander".to_string()),
        }
    }

    pub fn highlighted_tab(&self) -> Tab {
        self.current_tab()
    }

    /// Top bar, bottom tabs and drawer are shown on tab routes only.
    pub fn shows_chrome(&self) -> bool {
        self.current().is_tab()
    }

    // ------------------------------------------------------------------------
    // Snapshot / restore
    // ------------------------------------------------------------------------

    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            stack: self.stack.clone(),
            live: self.live,
            saved: self.saved.clone(),
        }
    }

    pub fn restore(snapshot: NavSnapshot) -> Result<Self, RestoreError> {
        match snapshot.stack.first() {
            None => return Err(RestoreError::EmptyStack),
            Some(Route::List) => {}
            Some(other) => return Err(RestoreError::InvalidRoot(*other)),
        }
        Ok(Self {
            stack: snapshot.stack,
            live: snapshot.live,
            saved: snapshot.saved,
        })
    }
}

/// Restorable form of a `Navigator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSnapshot {
    pub stack: Vec<Route>,
    pub live: TabState,
    #[serde(default)]
    pub saved: BTreeMap<Tab, TabState>,
}

impl NavSnapshot {
    pub fn to_json(&self) -> Result<String, RestoreError> {
        serde_json::to_string(self).map_err(RestoreError::Json)
    }

    pub fn from_json(json: &str) -> Result<Self, RestoreError> {
        serde_json::from_str(json).map_err(RestoreError::Json)
    }
}

#[derive(Debug)]
pub enum RestoreError {
    EmptyStack,
    InvalidRoot(Route),
    Json(serde_json::Error),
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestoreError::EmptyStack => write!(f, "navigation stack is empty"),
            RestoreError::InvalidRoot(route) => {
                write!(f, "navigation stack must start at list, found {route}")
            }
            RestoreError::Json(e) => write!(f, "navigation snapshot error: {e}"),
        }
    }
}

impl std::error::Error for RestoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(selected: usize, offset: usize) -> TabState {
        TabState { selected, offset }
    }

    #[test]
    fn test_initial_stack_is_list() {
        let nav = Navigator::new();
        assert_eq!(nav.stack(), &[Route::List]);
        assert_eq!(nav.current_tab(), Tab::List);
        assert!(nav.shows_chrome());
    }

    #[test]
    fn test_current_tab_reentry_is_idempotent() {
        let mut nav = Navigator::new();
        *nav.tab_state_mut() = scrolled(4, 2);

        assert_eq!(nav.navigate_to(Route::List), NavOutcome::Unchanged);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.tab_state(), &scrolled(4, 2));

        nav.navigate_to(Route::Settings);
        let depth = nav.depth();
        assert_eq!(nav.navigate_to(Route::Settings), NavOutcome::Unchanged);
        assert_eq!(nav.depth(), depth);
    }

    #[test]
    fn test_tab_switch_saves_and_restores_state() {
        let mut nav = Navigator::new();
        *nav.tab_state_mut() = scrolled(6, 3);

        assert_eq!(nav.navigate_to(Route::Favorites), NavOutcome::Switched);
        assert_eq!(nav.stack(), &[Route::List, Route::Favorites]);
        assert_eq!(nav.tab_state(), &TabState::default());
        assert_eq!(nav.saved_state(Tab::List), Some(&scrolled(6, 3)));
        *nav.tab_state_mut() = scrolled(1, 0);

        nav.navigate_to(Route::Settings);
        assert_eq!(nav.stack(), &[Route::List, Route::Settings]);

        nav.navigate_to(Route::Favorites);
        assert_eq!(nav.tab_state(), &scrolled(1, 0));

        nav.navigate_to(Route::List);
        assert_eq!(nav.stack(), &[Route::List]);
        assert_eq!(nav.tab_state(), &scrolled(6, 3));
    }

    #[test]
    fn test_detail_then_back_restores_route_and_state() {
        let mut nav = Navigator::new();
        nav.navigate_to(Route::Favorites);
        *nav.tab_state_mut() = scrolled(2, 1);
        let before = nav.snapshot();

        assert_eq!(nav.navigate_to_detail(7), NavOutcome::Pushed);
        assert_eq!(nav.current(), Route::Detail { item_id: 7 });
        assert!(!nav.shows_chrome());
        assert_eq!(nav.highlighted_tab(), Tab::Favorites);

        assert_eq!(nav.navigate_back(), BackOutcome::Popped(Route::Favorites));
        assert_eq!(nav.snapshot(), before);
    }

    #[test]
    fn test_stacked_details_pop_one_at_a_time() {
        let mut nav = Navigator::new();
        let root_depth = nav.depth();

        nav.navigate_to_detail(3);
        nav.navigate_to_detail(5);
        assert_eq!(nav.depth(), root_depth + 2);

        assert_eq!(
            nav.navigate_back(),
            BackOutcome::Popped(Route::Detail { item_id: 3 })
        );
        assert_eq!(nav.depth(), root_depth + 1);
        assert_eq!(nav.navigate_back(), BackOutcome::Popped(Route::List));
        assert_eq!(nav.depth(), root_depth);
    }

    #[test]
    fn test_back_at_root_keeps_stack() {
        let mut nav = Navigator::new();
        assert_eq!(nav.navigate_back(), BackOutcome::AtRoot);
        assert_eq!(nav.stack(), &[Route::List]);
    }

    #[test]
    fn test_back_from_tab_returns_to_root_tab_state() {
        let mut nav = Navigator::new();
        *nav.tab_state_mut() = scrolled(5, 5);
        nav.navigate_to(Route::Settings);
        *nav.tab_state_mut() = scrolled(2, 0);

        assert_eq!(nav.navigate_back(), BackOutcome::Popped(Route::List));
        assert_eq!(nav.tab_state(), &scrolled(5, 5));
        assert_eq!(nav.saved_state(Tab::Settings), Some(&scrolled(2, 0)));
    }

    #[test]
    fn test_missing_detail_keeps_tab_state() {
        let catalog = Catalog::seed();
        let mut nav = Navigator::new();
        nav.navigate_to(Route::Favorites);
        nav.navigate_to(Route::List);
        let saved_before = nav.snapshot().saved;

        nav.navigate_to_detail(11);
        assert_eq!(nav.title(&catalog), "Item not found");
        assert_eq!(nav.snapshot().saved, saved_before);
        assert_eq!(nav.current_tab(), Tab::List);
    }

    #[test]
    fn test_titles() {
        let catalog = Catalog::seed();
        let mut nav = Navigator::new();
        assert_eq!(nav.title(&catalog), "Home");
        nav.navigate_to(Route::Settings);
        assert_eq!(nav.title(&catalog), "Settings");
        nav.navigate_to_detail(1);
        assert_eq!(nav.title(&catalog), "Mountain Adventure");
    }

    #[test]
    fn test_switch_from_detail_pops_to_root() {
        let mut nav = Navigator::new();
        nav.navigate_to_detail(2);
        nav.navigate_to_detail(4);
        nav.navigate_to(Route::Favorites);
        assert_eq!(nav.stack(), &[Route::List, Route::Favorites]);
    }

    #[test]
    fn test_starting_at_deep_link() {
        let nav = Navigator::starting_at(Route::Detail { item_id: 9 });
        assert_eq!(nav.stack(), &[Route::List, Route::Detail { item_id: 9 }]);

        let nav = Navigator::starting_at(Route::Settings);
        assert_eq!(nav.stack(), &[Route::List, Route::Settings]);
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let mut nav = Navigator::new();
        *nav.tab_state_mut() = scrolled(3, 1);
        nav.navigate_to(Route::Favorites);
        nav.navigate_to_detail(8);

        let json = nav.snapshot().to_json().unwrap();
        let restored = Navigator::restore(NavSnapshot::from_json(&json).unwrap()).unwrap();
        assert_eq!(restored.snapshot(), nav.snapshot());
        assert_eq!(restored.current(), Route::Detail { item_id: 8 });
    }

    #[test]
    fn test_restore_rejects_bad_stacks() {
        let empty = NavSnapshot {
            stack: vec![],
            live: TabState::default(),
            saved: BTreeMap::new(),
        };
        assert!(matches!(
            Navigator::restore(empty),
            Err(RestoreError::EmptyStack)
        ));

        let detail_root = NavSnapshot {
            stack: vec![Route::Detail { item_id: 1 }],
            live: TabState::default(),
            saved: BTreeMap::new(),
        };
        assert!(matches!(
            Navigator::restore(detail_root),
            Err(RestoreError::InvalidRoot(Route::Detail { item_id: 1 }))
        ));
    }
}
