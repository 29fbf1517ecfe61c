use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

#[derive(Debug, Default)]
pub struct StatusIndicator {
    thinking: bool,
    status_text: String,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_thinking(&mut self, thinking: bool) {
        self.thinking = thinking;
        if !thinking {
            self.spinner_idx = 0;
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status_text = status.into();
    }

    pub fn clear_status(&mut self) {
        self.status_text.clear();
    }

    pub fn status(&self) -> &str {
        &self.status_text
    }

    pub fn update_spinner(&mut self) {
        if self.thinking {
            self.spinner_idx = self.spinner_idx.wrapping_add(1);
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let indicator = if self.thinking {
            SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()]
        } else {
            " "
        };

        let text = if !self.status_text.is_empty() {
            self.status_text.as_str()
        } else if self.thinking {
            "Waiting for reply..."
        } else {
            ""
        };

        let color = if !self.status_text.is_empty() {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let status = Line::from(vec![
            Span::styled(indicator, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(text.to_string(), Style::default().fg(color)),
        ]);

        frame.render_widget(Paragraph::new(status).alignment(Alignment::Left), area);
    }
}
