//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: route title, status line, menu hint
//! - `TabBar`: bottom tabs with the current one highlighted
//! - `ItemCard`: one catalog item
//! - `ImageView`: an image in its loading, ready or failed state
//!
//! ### Stateful Components (Event-Driven)
//!
//! Transient wrappers around persistent state that also translate
//! `TuiEvent`s into core `Action`s:
//! - `CardList`: Home and Favorites, over the tab's `TabState`
//! - `SettingsScreen`: settings rows, over the tab's `TabState`
//! - `DetailScreen`: item page, over the detail `ScrollViewState`
//! - `Drawer`: side menu, over `DrawerState`
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (top bar)
//! ├── tab_bar.rs      (bottom tabs)
//! ├── drawer.rs       (side menu overlay)
//! ├── card_list.rs    (Home / Favorites list)
//! ├── item_card.rs    (single card)
//! ├── image_view.rs   (half-block image widget)
//! ├── detail.rs       (item detail page)
//! └── settings.rs     (settings page)
//! ```

pub mod card_list;
pub mod detail;
pub mod drawer;
pub mod image_view;
pub mod item_card;
pub mod settings;
mod tab_bar;
mod title_bar;

pub use card_list::CardList;
pub use detail::DetailScreen;
pub use drawer::{Drawer, DrawerEvent, DrawerState};
pub use settings::SettingsScreen;
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;
