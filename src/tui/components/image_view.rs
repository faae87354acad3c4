//! # ImageView Widget
//!
//! Draws one item image in whatever state its fetch is in:
//!
//! - **Loading**: spinner
//! - **Ready**: half-block pixels, two image rows per terminal row
//! - **Failed**: "Error loading image" plus the reason
//!
//! Implemented as a plain ratatui `Widget` so it renders both into the frame
//! (cards) and into a `ScrollView` buffer (detail page).

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::images::Thumbnail;
use crate::tui::images::ImageState;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct ImageView<'a> {
    state: &'a ImageState,
    spinner_frame: usize,
    /// Short error text only ("Error Loading") for small card slots.
    compact: bool,
}

impl<'a> ImageView<'a> {
    pub fn new(state: &'a ImageState, spinner_frame: usize) -> Self {
        Self {
            state,
            spinner_frame,
            compact: false,
        }
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

impl Widget for ImageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        match self.state {
            ImageState::Ready(thumbnail) => render_pixels(thumbnail, area, buf),
            ImageState::Loading => {
                let frame = SPINNER[self.spinner_frame % SPINNER.len()];
                centered(
                    vec![Line::from(format!("{frame} Loading"))],
                    Style::default().fg(Color::DarkGray),
                    area,
                    buf,
                );
            }
            ImageState::Failed(reason) => {
                let style = Style::default().fg(Color::LightRed).bg(Color::Rgb(60, 20, 20));
                buf.set_style(area, style);
                let mut lines = vec![Line::from("Error loading image").style(style.add_modifier(Modifier::BOLD))];
                if !self.compact {
                    lines.push(Line::from(reason.as_str()));
                }
                centered(lines, style, area, buf);
            }
        }
    }
}

fn centered(lines: Vec<Line<'_>>, style: Style, area: Rect, buf: &mut Buffer) {
    let height = (lines.len() as u16).min(area.height);
    let top = area.y + (area.height - height) / 2;
    Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(Rect::new(area.x, top, area.width, area.height - (top - area.y)), buf);
}

/// Nearest-neighbour scale into `area` using `▀`: fg = upper pixel, bg = lower pixel.
fn render_pixels(thumbnail: &Thumbnail, area: Rect, buf: &mut Buffer) {
    let (tw, th) = (thumbnail.width(), thumbnail.height());
    let cols = area.width as u32;
    let rows = area.height as u32 * 2;
    for cy in 0..area.height {
        for cx in 0..area.width {
            let px = cx as u32 * tw / cols;
            let top = thumbnail.pixel(px, (cy as u32 * 2) * th / rows);
            let bottom = thumbnail.pixel(px, (cy as u32 * 2 + 1) * th / rows);
            if let Some(cell) = buf.cell_mut((area.x + cx, area.y + cy)) {
                cell.set_symbol("▀")
                    .set_fg(Color::Rgb(top[0], top[1], top[2]))
                    .set_bg(Color::Rgb(bottom[0], bottom[1], bottom[2]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, solid_thumbnail};

    #[test]
    fn test_ready_paints_half_blocks() {
        let state = ImageState::Ready(solid_thumbnail(4, 4, [255, 0, 0]));
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        ImageView::new(&state, 0).render(area, &mut buf);

        let cell = &buf[(2, 1)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_loading_shows_spinner() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        ImageView::new(&ImageState::Loading, 0).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("Loading"));
    }

    #[test]
    fn test_failure_shows_reason_unless_compact() {
        let state = ImageState::Failed("HTTP 404".to_string());
        let area = Rect::new(0, 0, 24, 4);

        let mut buf = Buffer::empty(area);
        ImageView::new(&state, 0).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Error loading image"));
        assert!(text.contains("HTTP 404"));

        let mut buf = Buffer::empty(area);
        ImageView::new(&state, 0).compact(true).render(area, &mut buf);
        assert!(!buffer_text(&buf).contains("HTTP 404"));
    }
}
