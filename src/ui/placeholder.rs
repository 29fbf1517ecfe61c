use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

/// Centred message inside `block`, used for panes with nothing to list.
pub fn draw_placeholder(f: &mut Frame<'_>, area: Rect, block: Block<'_>, text: &str) {
    let paragraph = Paragraph::new(text.to_string())
        .block(block)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
