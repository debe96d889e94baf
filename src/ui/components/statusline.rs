//! Status Line Component
//!
//! Displays the navigation phase, the typed sequence and messages.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::Phase;

/// Message type for status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::White,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

fn phase_indicator(phase: Phase) -> &'static str {
    match phase {
        Phase::Root => "ROOT",
        Phase::Positioned => "KEYS",
        Phase::Invalid => "INVALID",
    }
}

/// Status line widget
pub struct StatusLine<'a> {
    phase: Phase,
    sequence: &'a str,
    message: Option<(&'a str, MessageType)>,
    binding_count: Option<usize>,
}

impl<'a> StatusLine<'a> {
    pub fn new(phase: Phase, sequence: &'a str) -> Self {
        Self {
            phase,
            sequence,
            message: None,
            binding_count: None,
        }
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    pub fn binding_count(mut self, count: usize) -> Self {
        self.binding_count = Some(count);
        self
    }
}

impl<'a> Widget for StatusLine<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mut x = area.x;

        let phase_style = match self.phase {
            Phase::Root => Style::default().fg(Color::Black).bg(Color::Blue),
            Phase::Positioned => Style::default().fg(Color::Black).bg(Color::Green),
            Phase::Invalid => Style::default().fg(Color::Black).bg(Color::Red),
        };

        let phase_text = format!(" {} ", phase_indicator(self.phase));
        buf.set_string(x, area.y, &phase_text, phase_style.add_modifier(Modifier::BOLD));
        x += phase_text.len() as u16;

        buf.set_string(x, area.y, " ", Style::default().bg(Color::DarkGray));
        x += 1;

        if !self.sequence.is_empty() {
            let seq_text = format!("{} ", self.sequence);
            buf.set_string(
                x,
                area.y,
                &seq_text,
                Style::default().fg(Color::Magenta).bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            );
            x += seq_text.chars().count() as u16;
        }

        if let Some((msg, msg_type)) = self.message {
            buf.set_string(x, area.y, msg, Style::default().fg(msg_type.color()).bg(Color::DarkGray));
        }

        if let Some(count) = self.binding_count {
            let right_text = format!("{} bindings", count);
            let right_x = area.x + area.width.saturating_sub(right_text.len() as u16 + 1);
            buf.set_string(right_x, area.y, &right_text, Style::default().fg(Color::Gray).bg(Color::DarkGray));
        }
    }
}

/// Help bar widget
pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> HelpBar<'a> {
    pub fn new(hints: Vec<(&'a str, &'a str)>) -> Self {
        Self { hints }
    }

    pub fn for_session(escape_exits: bool) -> Self {
        let escape = if escape_exits { "close" } else { "reset" };
        Self::new(vec![("Esc", escape), ("Backspace", "up")])
    }
}

impl<'a> Widget for HelpBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
