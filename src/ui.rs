// src/ui.rs

pub mod categories;
pub mod chat;
pub mod footer;
pub mod header;
pub mod placeholder;
pub mod products;
pub mod selected;
pub mod warning;

use crate::app::{App, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};

/// Renders the whole screen for the current state.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(10),   // Panes
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    header::draw_header(f, rows[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(5)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(columns[1]);

    categories::draw_categories(f, left[0], app);
    products::draw_products(f, left[1], app);
    selected::draw_selected(f, right[0], app);
    chat::draw_chat(f, right[1], app);

    footer::draw_footer(f, rows[2], app);

    if let Some(message) = &app.warning {
        warning::draw_warning(f, f.area(), message);
    }
}

/// Bordered block whose border colour tracks focus.
pub(crate) fn pane_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {} ", title))
}

pub(crate) fn is_focused(app: &App, pane: Focus) -> bool {
    app.warning.is_none() && app.focus == pane
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::constants::*;
    use crate::models::Product;
    use crate::reducer::{reduce, Action};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn product(name: &str) -> Product {
        Product {
            name: name.to_string(),
            brand: "Vichy".to_string(),
            category: "cleanser".to_string(),
            description: "Purifying gel".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_initial_screen_shows_placeholders() {
        let app = App::new(&Config::default());
        let screen = render(&app);
        assert!(screen.contains(PRODUCTS_PLACEHOLDER));
        assert!(screen.contains(SELECTION_PLACEHOLDER));
    }

    #[test]
    fn test_selection_panel_hides_placeholder_when_selected() {
        let mut app = App::new(&Config::default());
        reduce(&mut app, Action::SelectCategory("cleanser".to_string()));
        reduce(
            &mut app,
            Action::CatalogLoaded {
                category: "cleanser".to_string(),
                result: Ok(vec![product("Normaderm")]),
            },
        );
        reduce(&mut app, Action::ToggleProduct("Normaderm".to_string()));

        let screen = render(&app);
        assert!(!screen.contains(SELECTION_PLACEHOLDER));
        assert!(screen.contains("[x] Normaderm"));
    }

    #[test]
    fn test_warning_modal_is_drawn() {
        let mut app = App::new(&Config::default());
        reduce(&mut app, Action::GenerateRoutine);
        let screen = render(&app);
        assert!(screen.contains("No products selected. Please select"));
    }
}
