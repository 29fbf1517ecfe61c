use crate::app::{App, Focus};
use crate::ui::{is_focused, pane_block};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{List, ListItem, ListState},
    Frame,
};

pub fn draw_categories(f: &mut Frame<'_>, area: Rect, app: &App) {
    let current = app.current_category.as_deref();
    let items: Vec<ListItem> = app
        .categories
        .iter()
        .map(|category| {
            if Some(category.as_str()) == current {
                ListItem::new(format!("● {}", category)).style(
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {}", category)).style(Style::default().fg(Color::White))
            }
        })
        .collect();

    let list = List::new(items)
        .block(pane_block("Category", is_focused(app, Focus::Categories)))
        .highlight_style(
            Style::default()
                .bg(Color::LightMagenta)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ");

    let mut state = ListState::default().with_selected(Some(app.category_cursor));
    f.render_stateful_widget(list, area, &mut state);
}
