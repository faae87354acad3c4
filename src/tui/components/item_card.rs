//! # ItemCard Component
//!
//! One catalog item in a list: image on the left (when images are on),
//! category chip, title, subtitle and a two-line description excerpt on the
//! right, favorite marker in the top border.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::catalog::Item;
use crate::tui::component::Component;
use crate::tui::components::image_view::ImageView;
use crate::tui::images::ImageState;

/// Rows per card, borders included.
pub const CARD_HEIGHT: u16 = 7;
const IMAGE_COLUMNS: u16 = 18;
const DESCRIPTION_LINES: usize = 2;

pub struct ItemCard<'a> {
    pub item: &'a Item,
    pub favorite: bool,
    pub selected: bool,
    /// `None` when images are disabled.
    pub image: Option<&'a ImageState>,
    pub spinner_frame: usize,
}

impl Component for ItemCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_style(border_style)
            .title_top(favorite_marker(self.favorite).right_aligned());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text_area = match self.image {
            Some(state) if inner.width > IMAGE_COLUMNS * 2 => {
                let [image_area, _, text_area] = Layout::horizontal([
                    Constraint::Length(IMAGE_COLUMNS),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .areas(inner);
                frame.render_widget(
                    ImageView::new(state, self.spinner_frame).compact(true),
                    image_area,
                );
                text_area
            }
            _ => inner,
        };

        let title_style = if self.selected {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let mut lines = vec![
            Line::from(category_chip(&self.item.category)),
            Line::from(Span::styled(self.item.title.as_str(), title_style)),
            Line::from(Span::styled(
                self.item.subtitle.as_str(),
                Style::default().fg(Color::Gray),
            )),
        ];
        lines.extend(
            excerpt(&self.item.description, text_area.width as usize, DESCRIPTION_LINES)
                .into_iter()
                .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::DarkGray)))),
        );

        frame.render_widget(Paragraph::new(lines), text_area);
    }
}

pub fn category_chip(category: &str) -> Span<'_> {
    Span::styled(
        format!(" {category} "),
        Style::default().fg(Color::Black).bg(Color::LightCyan),
    )
}

pub fn favorite_marker(favorite: bool) -> Line<'static> {
    if favorite {
        Line::from(Span::styled(" ♥ ", Style::default().fg(Color::LightRed)))
    } else {
        Line::from(Span::styled(" ♡ ", Style::default().fg(Color::DarkGray)))
    }
}

/// First `max_lines` wrapped lines of `text`, with "…" when cut short.
fn excerpt(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let wrapped = textwrap::wrap(text, width);
    let truncated = wrapped.len() > max_lines;
    let mut lines: Vec<String> = wrapped
        .into_iter()
        .take(max_lines)
        .map(|line| line.into_owned())
        .collect();
    if truncated {
        if let Some(last) = lines.last_mut() {
            while unicode_width::UnicodeWidthStr::width(last.as_str()) + 1 > width {
                if last.pop().is_none() {
                    break;
                }
            }
            last.push('…');
        }
    }
    lines
}
