//! # Detail Screen
//!
//! Full-screen page for one item, pushed on top of whichever tab opened it.
//! Header with the back hint and title, a scrollable body (hero image, chip,
//! title, About, Highlights) and a footer with the favorite control.
//!
//! The scroll offset lives in `TuiState`. A newly pushed page opens at the
//! top; going back returns to the offset the page was left at.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::action::Action;
use crate::core::catalog::{Item, ItemId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::image_view::ImageView;
use crate::tui::components::item_card::{category_chip, favorite_marker};
use crate::tui::event::TuiEvent;
use crate::tui::images::ImageState;

pub const HIGHLIGHTS: [&str; 4] = [
    "Expert guides and instructors",
    "Small group sizes for personalized experience",
    "All equipment provided",
    "Flexible booking and cancellation",
];

pub struct DetailScreen<'a> {
    item_id: ItemId,
    /// `None` when the id is not in the catalog.
    item: Option<&'a Item>,
    favorite: bool,
    image: Option<&'a ImageState>,
    spinner_frame: usize,
    scroll: &'a mut ScrollViewState,
    status: &'a str,
    /// Item whose hero image was drawn, if any.
    pub visible: Option<ItemId>,
}

impl<'a> DetailScreen<'a> {
    pub fn new(
        item_id: ItemId,
        item: Option<&'a Item>,
        favorite: bool,
        scroll: &'a mut ScrollViewState,
    ) -> Self {
        Self {
            item_id,
            item,
            favorite,
            image: None,
            spinner_frame: 0,
            scroll,
            status: "",
            visible: None,
        }
    }

    pub fn image(mut self, image: Option<&'a ImageState>, spinner_frame: usize) -> Self {
        self.image = image;
        self.spinner_frame = spinner_frame;
        self
    }

    pub fn status(mut self, status: &'a str) -> Self {
        self.status = status;
        self
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = self.item.map_or("Item not found", |item| item.title.as_str());
        let header = Line::from(vec![
            Span::styled(" ← Esc ", Style::default().fg(Color::Black).bg(Color::Gray)),
            Span::raw("  "),
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        ]);
        frame.render_widget(
            Paragraph::new(header).style(Style::default().bg(Color::Rgb(30, 30, 40))),
            area,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let [control_area, status_area] =
            Layout::horizontal([Constraint::Length(28), Constraint::Min(0)]).areas(area);

        if self.item.is_some() {
            let label = if self.favorite {
                "Remove from favorites"
            } else {
                "Add to favorites"
            };
            let mut spans = vec![Span::styled(" [f]", Style::default().fg(Color::DarkGray))];
            spans.extend(favorite_marker(self.favorite).spans);
            spans.push(Span::raw(label));
            frame.render_widget(Paragraph::new(Line::from(spans)), control_area);
        }

        frame.render_widget(
            Paragraph::new(self.status)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right),
            status_area,
        );
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect, item: &Item) {
        let content_width = area.width.saturating_sub(1);
        let hero_height = match self.image {
            Some(_) => hero_height(content_width),
            None => 0,
        };

        let body = Paragraph::new(body_lines(item, content_width)).wrap(Wrap { trim: false });
        let text_height = body.line_count(content_width) as u16;
        let gap = u16::from(hero_height > 0);
        let total_height = hero_height + gap + text_height;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        if let Some(state) = self.image {
            scroll_view.render_widget(
                ImageView::new(state, self.spinner_frame),
                Rect::new(0, 0, content_width, hero_height),
            );
            self.visible = Some(item.id);
        }
        scroll_view.render_widget(
            body,
            Rect::new(0, hero_height + gap, content_width, text_height),
        );

        // Manual clamp: the scroll view lets page-down run past the end.
        let max_y = total_height.saturating_sub(area.height);
        let offset = self.scroll.offset();
        if offset.y > max_y {
            self.scroll.set_offset(Position { x: 0, y: max_y });
        }

        frame.render_stateful_widget(scroll_view, area, self.scroll);
    }

    fn render_not_found(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from("Item not found").style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from(format!("No item with id {}", self.item_id))
                .style(Style::default().fg(Color::DarkGray)),
            Line::from(""),
            Line::from("Press Esc to go back").style(Style::default().fg(Color::DarkGray)),
        ];
        let top = area.height.saturating_sub(lines.len() as u16) / 2;
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            Rect {
                y: area.y + top,
                height: area.height - top,
                ..area
            },
        );
    }
}

impl Component for DetailScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [header_area, body_area, footer_area] =
            Layout::vertical([Length(1), Min(0), Length(1)]).areas(area);

        self.visible = None;
        self.render_header(frame, header_area);
        match self.item {
            Some(item) => self.render_body(frame, body_area, item),
            None => self.render_not_found(frame, body_area),
        }
        self.render_footer(frame, footer_area);
    }
}

impl EventHandler for DetailScreen<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::CursorUp => self.scroll.scroll_up(),
            TuiEvent::CursorDown => self.scroll.scroll_down(),
            TuiEvent::PageUp => self.scroll.scroll_page_up(),
            TuiEvent::PageDown => self.scroll.scroll_page_down(),
            TuiEvent::Home => self.scroll.scroll_to_top(),
            TuiEvent::End => self.scroll.scroll_to_bottom(),
            TuiEvent::ToggleFavorite => {
                return self.item.map(|item| Action::ToggleFavorite(item.id));
            }
            _ => {}
        }
        None
    }
}

/// 16:9 hero, halved for half-block rows.
fn hero_height(width: u16) -> u16 {
    ((width as u32 * 9 / 16) / 2).clamp(4, 16) as u16
}

fn body_lines(item: &Item, width: u16) -> Vec<Line<'_>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let divider = Line::from("─".repeat(width as usize)).style(Style::default().fg(Color::DarkGray));

    let mut lines = vec![
        Line::from(category_chip(&item.category)),
        Line::from(""),
        Line::from(Span::styled(
            item.title.as_str(),
            heading.fg(Color::White).add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            item.subtitle.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        divider.clone(),
        Line::from(Span::styled("About", heading)),
        Line::from(item.description.as_str()),
        Line::from(""),
        divider,
        Line::from(Span::styled("Highlights", heading)),
    ];
    lines.extend(HIGHLIGHTS.iter().map(|highlight| {
        Line::from(vec![
            Span::styled(" ✓ ", Style::default().fg(Color::Green)),
            Span::raw(*highlight),
        ])
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::test_support::{buffer_text, solid_thumbnail};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_detail(
        item_id: ItemId,
        image: Option<&ImageState>,
        scroll: &mut ScrollViewState,
        height: u16,
    ) -> (String, Option<ItemId>) {
        let catalog = Catalog::seed();
        let backend = TestBackend::new(70, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut visible = None;
        terminal
            .draw(|f| {
                let mut screen =
                    DetailScreen::new(item_id, catalog.get(item_id).ok(), true, scroll)
                        .image(image, 0)
                        .status("Added to favorites: Mountain Adventure");
                screen.render(f, f.area());
                visible = screen.visible;
            })
            .unwrap();
        (buffer_text(terminal.backend().buffer()), visible)
    }

    #[test]
    fn test_detail_shows_sections() {
        let mut scroll = ScrollViewState::default();
        let (text, visible) = render_detail(1, None, &mut scroll, 40);
        assert!(text.contains("← Esc"));
        assert!(text.contains("Mountain Adventure"));
        assert!(text.contains("About"));
        assert!(text.contains("Highlights"));
        assert!(text.contains("Expert guides and instructors"));
        assert!(text.contains("Remove from favorites"));
        assert_eq!(visible, None);
    }

    #[test]
    fn test_detail_hero_image() {
        let mut scroll = ScrollViewState::default();
        let state = ImageState::Ready(solid_thumbnail(8, 4, [10, 20, 30]));
        let (text, visible) = render_detail(3, Some(&state), &mut scroll, 40);
        assert!(text.contains('▀'));
        assert_eq!(visible, Some(3));
    }

    #[test]
    fn test_missing_item() {
        let mut scroll = ScrollViewState::default();
        let (text, visible) = render_detail(42, Some(&ImageState::Loading), &mut scroll, 20);
        assert!(text.contains("Item not found"));
        assert!(text.contains("No item with id 42"));
        assert!(!text.contains("Add to favorites"));
        assert_eq!(visible, None);
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut scroll = ScrollViewState::default();
        scroll.set_offset(Position { x: 0, y: 500 });
        render_detail(1, None, &mut scroll, 12);
        assert!(scroll.offset().y < 500);
        assert!(scroll.offset().y > 0);
    }

    #[test]
    fn test_events() {
        let catalog = Catalog::seed();
        let mut scroll = ScrollViewState::default();

        let mut screen = DetailScreen::new(5, catalog.get(5).ok(), false, &mut scroll);
        assert_eq!(
            screen.handle_event(&TuiEvent::ToggleFavorite),
            Some(Action::ToggleFavorite(5))
        );
        assert_eq!(screen.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(scroll.offset().y, 1);

        let mut missing = DetailScreen::new(99, None, false, &mut scroll);
        assert_eq!(missing.handle_event(&TuiEvent::ToggleFavorite), None);
    }

    #[test]
    fn test_hero_height_bounds() {
        assert_eq!(hero_height(10), 4);
        assert_eq!(hero_height(64), 16);
        assert_eq!(hero_height(200), 16);
    }
}
