use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::chat_pane::ChatEntry;
use crate::ui::{is_focused, pane_block};

fn entry_style(entry: &ChatEntry) -> Style {
    match entry {
        ChatEntry::Heading(_) => Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD),
        ChatEntry::User(_) => Style::default().fg(Color::Rgb(255, 223, 128)),
        ChatEntry::Assistant(_) | ChatEntry::Body(_) => Style::default().fg(Color::Rgb(144, 238, 144)),
        ChatEntry::Hint(_) => Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
        ChatEntry::Pending(_) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
        ChatEntry::Notice(_) => Style::default().fg(Color::LightYellow),
    }
}

/// Wraps every entry to `width` so the pane can stick to the bottom.
fn wrapped_lines(entries: &[ChatEntry], width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for entry in entries {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        let style = entry_style(entry);
        for paragraph in entry.text().lines() {
            if paragraph.is_empty() {
                lines.push(Line::from(""));
                continue;
            }
            for piece in textwrap::wrap(paragraph, width) {
                lines.push(Line::from(Span::styled(piece.into_owned(), style)));
            }
        }
    }
    lines
}

pub fn draw_chat(f: &mut Frame<'_>, area: Rect, app: &App) {
    let focused = is_focused(app, Focus::Chat);
    let block = pane_block("Chat", focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Messages
            Constraint::Length(1), // Status
            Constraint::Length(3), // Input
        ])
        .split(inner);

    let lines = wrapped_lines(app.chat_pane.entries(), chunks[0].width as usize);
    let scroll = (lines.len() as u16).saturating_sub(chunks[0].height);
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), chunks[0]);

    app.status_indicator.render(f, chunks[1]);

    let input_style = if app.is_sending() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let title = if app.is_sending() { "Waiting..." } else { "Ask a question" };

    let visible_width = chunks[2].width.saturating_sub(4);
    let text_width = app.chat_input.chars().count() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    let input = Paragraph::new(Line::from(vec![
        Span::styled("→ ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.chat_input.clone(), input_style),
    ]))
    .block(Block::default().borders(Borders::ALL).title(title))
    .scroll((0, scroll_offset));
    f.render_widget(input, chunks[2]);

    if focused {
        let cursor_x = chunks[2].x + 3 + text_width - scroll_offset;
        f.set_cursor_position((cursor_x, chunks[2].y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_lines_wraps_and_separates() {
        let entries = vec![
            ChatEntry::User("one two three four".to_string()),
            ChatEntry::Assistant("ok".to_string()),
        ];
        let lines = wrapped_lines(&entries, 10);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text, vec!["You: one", "two three", "four", "", "Assistant:", "ok"]);
    }

    #[test]
    fn test_wrapped_lines_keeps_reply_paragraphs() {
        let entries = vec![ChatEntry::Body("Morning\n\nEvening".to_string())];
        let text: Vec<String> = wrapped_lines(&entries, 40)
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(text, vec!["Morning", "", "Evening"]);
    }
}
