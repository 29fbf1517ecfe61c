use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Routine Builder",
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  product picker & skincare advisor",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::ITALIC),
        ),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(title, chunks[0]);

    let category = app.current_category.as_deref().unwrap_or("none");
    let summary = format!(
        "category: {}  |  selected: {}  |  turns: {} ",
        category,
        app.selection.len(),
        app.transcript.len()
    );
    f.render_widget(
        Paragraph::new(summary)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right),
        chunks[1],
    );
}
