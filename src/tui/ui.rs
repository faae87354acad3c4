use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardList, DetailScreen, Drawer, SettingsScreen, TabBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

const HOME_EMPTY: (&str, &str) = ("No items", "The catalog is empty");
const FAVORITES_EMPTY: (&str, &str) = ("No favorites yet", "Press f on an item to add it");

/// Draw one frame: chrome on tab routes, the active screen, and the drawer
/// overlay when open. Records visible image ids and page size in `tui`.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    tui.visible_images.clear();
    let area = frame.area();

    if !app.nav.shows_chrome() {
        draw_screen(frame, area, app, tui, spinner_frame);
        return;
    }

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, tab_area] = layout.areas(area);

    TitleBar::new(app.nav.title(&app.catalog), &app.status_message).render(frame, title_area);
    draw_screen(frame, main_area, app, tui, spinner_frame);
    TabBar {
        highlighted: app.nav.highlighted_tab(),
    }
    .render(frame, tab_area);

    if tui.drawer.open {
        Drawer::new(&mut tui.drawer, app.nav.current_tab()).render(frame, area);
    }
}

fn draw_screen(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    // Render works on a copy; the navigator's TabState only changes through events.
    let mut tab_state = *app.nav.tab_state();

    match app.nav.current() {
        Route::List => {
            let mut list =
                CardList::new(app.catalog.all().iter().collect(), &app.favorites, &mut tab_state)
                    .images(&tui.images, spinner_frame)
                    .empty_state(HOME_EMPTY);
            list.render(frame, area);
            tui.cards_per_page = list.cards_per_page;
            tui.visible_images = list.visible;
        }
        Route::Favorites => {
            let mut list = CardList::new(app.favorite_items(), &app.favorites, &mut tab_state)
                .images(&tui.images, spinner_frame)
                .empty_state(FAVORITES_EMPTY);
            list.render(frame, area);
            tui.cards_per_page = list.cards_per_page;
            tui.visible_images = list.visible;
        }
        Route::Settings => {
            SettingsScreen::new(&app.settings, &mut tab_state).render(frame, area);
        }
        Route::Detail { item_id } => {
            let image = tui
                .images
                .enabled()
                .then(|| tui.images.state(item_id));
            let mut screen = DetailScreen::new(
                item_id,
                app.catalog.get(item_id).ok(),
                app.is_favorite(item_id),
                &mut tui.detail_scroll,
            )
            .image(image, spinner_frame)
            .status(&app.status_message);
            screen.render(frame, area);
            tui.visible_images.extend(screen.visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::route::Tab;
    use crate::test_support::{buffer_text, test_app};
    use crate::tui::images::ImageBoard;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn tui_without_images() -> TuiState {
        TuiState::new(ImageBoard::new(None))
    }

    #[test]
    fn test_home_with_chrome() {
        let app = test_app();
        let mut tui = tui_without_images();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Home"));
        assert!(text.contains("[m] Menu"));
        assert!(text.contains("Mountain Adventure"));
        assert!(text.contains("2 Favorites"));
        assert!(tui.cards_per_page >= 3);
        assert!(tui.visible_images.is_empty());
    }

    #[test]
    fn test_favorites_empty_then_filled() {
        let mut app = test_app();
        let mut tui = tui_without_images();
        update(&mut app, Action::SwitchTab(Tab::Favorites));
        assert!(draw(&app, &mut tui).contains("No favorites yet"));

        update(&mut app, Action::ToggleFavorite(4));
        let text = draw(&app, &mut tui);
        assert!(text.contains("Forest Retreat"));
        assert!(!text.contains("Mountain Adventure"));
        assert!(text.contains("Added to favorites: Forest Retreat"));
    }

    #[test]
    fn test_detail_hides_chrome() {
        let mut app = test_app();
        let mut tui = tui_without_images();
        update(&mut app, Action::OpenDetail(2));
        let text = draw(&app, &mut tui);
        assert!(text.contains("Ocean Paradise"));
        assert!(text.contains("Highlights"));
        assert!(!text.contains("[m] Menu"));
        assert!(!text.contains("3 Settings"));
    }

    #[test]
    fn test_missing_detail_renders_not_found() {
        let mut app = test_app();
        let mut tui = tui_without_images();
        update(&mut app, Action::OpenDetail(11));
        assert!(draw(&app, &mut tui).contains("Item not found"));
    }

    #[test]
    fn test_settings_screen() {
        let mut app = test_app();
        let mut tui = tui_without_images();
        update(&mut app, Action::SwitchTab(Tab::Settings));
        let text = draw(&app, &mut tui);
        assert!(text.contains("Dark Mode"));
        assert!(text.contains("Version"));
    }

    #[test]
    fn test_drawer_overlay() {
        let app = test_app();
        let mut tui = tui_without_images();
        tui.drawer.open(app.nav.current_tab());
        let text = draw(&app, &mut tui);
        assert!(text.contains("Explore the world"));
    }

    #[test]
    fn test_render_does_not_move_tab_state() {
        let mut app = test_app();
        app.nav.tab_state_mut().selected = 40;
        let mut tui = tui_without_images();
        draw(&app, &mut tui);
        assert_eq!(app.nav.tab_state().selected, 40);
    }
}
