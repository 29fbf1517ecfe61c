use crate::chat_pane::ChatPane;
use crate::config::Config;
use crate::conversation::Transcript;
use crate::models::Product;
use crate::selection::SelectedProducts;
use crate::status_indicator::StatusIndicator;

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Categories,
    Products,
    Selected,
    Chat,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Categories => Focus::Products,
            Focus::Products => Focus::Selected,
            Focus::Selected => Focus::Chat,
            Focus::Chat => Focus::Categories,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Categories => Focus::Chat,
            Focus::Products => Focus::Categories,
            Focus::Selected => Focus::Products,
            Focus::Chat => Focus::Selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    /// No category chosen yet.
    Placeholder,
    Loading,
    Loaded(Vec<Product>),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Routine,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Sending(RequestKind),
}

/// All UI state. Mutated only by `reducer::reduce`.
#[derive(Debug)]
pub struct App {
    pub focus: Focus,
    pub categories: Vec<String>,
    pub category_cursor: usize,
    pub current_category: Option<String>,
    pub catalog_view: CatalogView,
    pub product_cursor: usize,
    pub selection: SelectedProducts,
    pub selection_cursor: usize,
    pub transcript: Transcript,
    pub chat_pane: ChatPane,
    pub chat_input: String,
    pub request: RequestState,
    pub warning: Option<String>,
    pub status_indicator: StatusIndicator,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> App {
        App {
            focus: Focus::Categories,
            categories: config.categories.clone(),
            category_cursor: 0,
            current_category: None,
            catalog_view: CatalogView::Placeholder,
            product_cursor: 0,
            selection: SelectedProducts::new(),
            selection_cursor: 0,
            transcript: Transcript::new(&config.system_prompt),
            chat_pane: ChatPane::new(),
            chat_input: String::new(),
            request: RequestState::Idle,
            warning: None,
            status_indicator: StatusIndicator::new(),
            should_quit: false,
        }
    }

    /// Products currently shown in the grid.
    pub fn visible_products(&self) -> &[Product] {
        match &self.catalog_view {
            CatalogView::Loaded(products) => products,
            _ => &[],
        }
    }

    /// Grid highlighting is derived from the selection so the two views never drift.
    pub fn is_selected(&self, product: &Product) -> bool {
        self.selection.contains(&product.name)
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.request, RequestState::Sending(_))
    }

    pub fn highlighted_category(&self) -> Option<&str> {
        self.categories
            .get(self.category_cursor)
            .map(String::as_str)
    }

    pub fn highlighted_product(&self) -> Option<&Product> {
        self.visible_products().get(self.product_cursor)
    }

    pub fn highlighted_selection(&self) -> Option<&Product> {
        self.selection.get(self.selection_cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_round_trips() {
        let mut focus = Focus::Categories;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Categories);
        assert_eq!(Focus::Categories.prev(), Focus::Chat);
    }

    #[test]
    fn test_new_app_starts_idle_with_placeholder() {
        let app = App::new(&Config::default());
        assert_eq!(app.catalog_view, CatalogView::Placeholder);
        assert!(app.visible_products().is_empty());
        assert_eq!(app.transcript.len(), 1);
        assert!(!app.is_sending());
    }
}
