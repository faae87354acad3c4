//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::state::App;
use crate::images::Thumbnail;

/// Creates a test App over the seed catalog.
pub fn test_app() -> App {
    App::new(Arc::new(Catalog::seed()))
}

/// A small solid-color thumbnail.
pub fn solid_thumbnail(width: u32, height: u32, rgb: [u8; 3]) -> Thumbnail {
    Thumbnail::new(width, height, vec![rgb; (width * height) as usize])
}

/// Flattens a rendered buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
