use crate::app::{App, Focus};
use crate::reducer::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translates a key press into an action for the focused pane.
pub fn map_key(app: &App, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.warning.is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissWarning),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        KeyCode::Up => return Some(Action::CursorUp),
        KeyCode::Down => return Some(Action::CursorDown),
        _ => {}
    }

    if app.focus == Focus::Chat {
        return handle_chat_key(key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('g') => Some(Action::GenerateRoutine),
        KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Char('j') => Some(Action::CursorDown),
        _ => handle_list_key(app, key),
    }
}

fn handle_chat_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::SubmitChat),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Esc => Some(Action::FocusNext),
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_list_key(app: &App, key: KeyEvent) -> Option<Action> {
    match (app.focus, key.code) {
        (Focus::Categories, KeyCode::Enter) => app
            .highlighted_category()
            .map(|category| Action::SelectCategory(category.to_string())),
        (Focus::Products, KeyCode::Enter | KeyCode::Char(' ')) => app
            .highlighted_product()
            .map(|product| Action::ToggleProduct(product.name.clone())),
        (Focus::Selected, KeyCode::Enter | KeyCode::Delete | KeyCode::Backspace) => app
            .highlighted_selection()
            .map(|product| Action::RemoveSelected(product.name.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CatalogView;
    use crate::config::Config;
    use crate::models::Product;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn product(name: &str) -> Product {
        Product {
            name: name.to_string(),
            brand: "Kiehl's".to_string(),
            category: "moisturizer".to_string(),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = App::new(&Config::default());
        app.focus = Focus::Chat;
        app.warning = Some("warning".to_string());
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&app, key), Some(Action::Quit));
    }

    #[test]
    fn test_enter_on_category_selects_it() {
        let mut app = App::new(&Config::default());
        app.category_cursor = 1;
        assert_eq!(
            map_key(&app, press(KeyCode::Enter)),
            Some(Action::SelectCategory(app.categories[1].clone()))
        );
    }

    #[test]
    fn test_space_on_product_toggles_it() {
        let mut app = App::new(&Config::default());
        app.focus = Focus::Products;
        app.catalog_view = CatalogView::Loaded(vec![product("Ultra Facial Cream")]);
        assert_eq!(
            map_key(&app, press(KeyCode::Char(' '))),
            Some(Action::ToggleProduct("Ultra Facial Cream".to_string()))
        );
    }

    #[test]
    fn test_delete_on_selected_removes_it() {
        let mut app = App::new(&Config::default());
        app.focus = Focus::Selected;
        app.selection.toggle(&product("Ultra Facial Cream"));
        assert_eq!(
            map_key(&app, press(KeyCode::Delete)),
            Some(Action::RemoveSelected("Ultra Facial Cream".to_string()))
        );
    }

    #[test]
    fn test_chat_focus_captures_letters() {
        let mut app = App::new(&Config::default());
        app.focus = Focus::Chat;
        assert_eq!(
            map_key(&app, press(KeyCode::Char('q'))),
            Some(Action::InputChar('q'))
        );
        assert_eq!(
            map_key(&app, press(KeyCode::Char('g'))),
            Some(Action::InputChar('g'))
        );
        assert_eq!(map_key(&app, press(KeyCode::Enter)), Some(Action::SubmitChat));
    }

    #[test]
    fn test_g_generates_outside_chat() {
        let app = App::new(&Config::default());
        assert_eq!(
            map_key(&app, press(KeyCode::Char('g'))),
            Some(Action::GenerateRoutine)
        );
    }

    #[test]
    fn test_warning_only_accepts_dismiss() {
        let mut app = App::new(&Config::default());
        app.warning = Some("warning".to_string());
        assert_eq!(map_key(&app, press(KeyCode::Tab)), None);
        assert_eq!(
            map_key(&app, press(KeyCode::Enter)),
            Some(Action::DismissWarning)
        );
    }

    #[test]
    fn test_enter_on_empty_grid_does_nothing() {
        let mut app = App::new(&Config::default());
        app.focus = Focus::Products;
        assert_eq!(map_key(&app, press(KeyCode::Enter)), None);
    }
}
