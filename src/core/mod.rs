//! # Core Application Logic
//!
//! This module contains Wander's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (items)      │
//!                    │  • Navigator (routes)   │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Item` and the read-only `Catalog` store
//! - [`route`]: `Route` and the top-level `Tab` set
//! - [`navigation`]: the back-stack state machine
//! - [`state`]: The `App` struct, all domain state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: TOML config and override resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod route;
pub mod state;
