//! # TabBar Component
//!
//! Bottom tab bar: one equal-width segment per tab, the highlighted one
//! reversed. Shown on tab screens only; the highlight follows the current
//! tab, not key presses, so it always matches the visible route.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::route::Tab;
use crate::tui::component::Component;

pub struct TabBar {
    pub highlighted: Tab,
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let segments = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
        for (tab, segment) in Tab::ALL.into_iter().zip(segments.iter()) {
            let selected = tab == self.highlighted;
            let style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            let label = format!(
                "{} {} {}",
                tab.icon(selected),
                tab.index() + 1,
                tab.label()
            );
            frame.render_widget(
                Paragraph::new(Line::from(label).centered()).style(style),
                *segment,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_all_tabs_listed_with_highlight() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                TabBar {
                    highlighted: Tab::Favorites,
                }
                .render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer_text(buffer);
        assert!(text.contains("1 Home"));
        assert!(text.contains("2 Favorites"));
        assert!(text.contains("3 Settings"));
        assert!(text.contains(Tab::Favorites.icon(true)));
        assert!(text.contains(Tab::List.icon(false)));

        // Middle segment is reversed, the first is not.
        assert!(buffer[(30, 0)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(5, 0)].modifier.contains(Modifier::REVERSED));
    }
}
