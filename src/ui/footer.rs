use crate::app::{App, Focus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the footer with instructions for the focused pane
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let instructions = if app.warning.is_some() {
        "Press Enter or Esc to dismiss."
    } else {
        match app.focus {
            Focus::Categories => {
                "↑/↓ choose a category, Enter to show products, Tab next pane, g routine, q quit."
            }
            Focus::Products => "↑/↓ move, Enter/Space select or unselect, Tab next pane, g routine, q quit.",
            Focus::Selected => "↑/↓ move, Enter/Delete remove, Tab next pane, g routine, q quit.",
            Focus::Chat => "Type a question and press Enter to send. Esc or Tab to leave the chat.",
        }
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
