use crate::app::{App, CatalogView, Focus};
use crate::constants::*;
use crate::ui::{is_focused, pane_block, placeholder::draw_placeholder};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

/// The product grid. Selected cards are marked from the selection set.
pub fn draw_products(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = pane_block("Products", is_focused(app, Focus::Products));

    let products = match &app.catalog_view {
        CatalogView::Placeholder => return draw_placeholder(f, area, block, PRODUCTS_PLACEHOLDER),
        CatalogView::Loading => return draw_placeholder(f, area, block, PRODUCTS_LOADING),
        CatalogView::Failed => return draw_placeholder(f, area, block, PRODUCTS_LOAD_FAILED),
        CatalogView::Loaded(products) if products.is_empty() => {
            return draw_placeholder(f, area, block, PRODUCTS_EMPTY)
        }
        CatalogView::Loaded(products) => products,
    };

    let items: Vec<ListItem> = products
        .iter()
        .map(|product| {
            let selected = app.is_selected(product);
            let (marker, name_style) = if selected {
                (
                    "[x] ",
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("[ ] ", Style::default().fg(Color::White))
            };

            let mut lines = vec![
                Line::from(vec![
                    Span::styled(format!("{}{}", marker, product.name), name_style),
                    Span::styled(
                        format!("  {}", product.brand),
                        Style::default().fg(Color::LightBlue),
                    ),
                ]),
            ];
            if !product.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", product.description),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(60, 40, 70)))
        .highlight_symbol("➤ ");

    let mut state = ListState::default().with_selected(Some(app.product_cursor));
    f.render_stateful_widget(list, area, &mut state);
}
