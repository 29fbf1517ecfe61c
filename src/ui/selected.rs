use crate::app::{App, Focus};
use crate::selection::selection_lines;
use crate::ui::{is_focused, pane_block, placeholder::draw_placeholder};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{List, ListItem, ListState},
    Frame,
};

pub fn draw_selected(f: &mut Frame<'_>, area: Rect, app: &App) {
    let focused = is_focused(app, Focus::Selected);
    let title = format!("Selected Products ({})", app.selection.len());
    let block = pane_block(&title, focused);

    let lines = selection_lines(&app.selection);
    if app.selection.is_empty() {
        let text = lines.first().map(String::as_str).unwrap_or_default();
        return draw_placeholder(f, area, block, text);
    }

    let items: Vec<ListItem> = lines
        .into_iter()
        .map(|line| ListItem::new(line).style(Style::default().fg(Color::LightGreen)))
        .collect();

    let highlight = if focused {
        Style::default()
            .bg(Color::LightRed)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol(if focused { "✕ " } else { "  " });

    let mut state = ListState::default().with_selected(Some(app.selection_cursor));
    f.render_stateful_widget(list, area, &mut state);
}
