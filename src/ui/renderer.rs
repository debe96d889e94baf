//! Renderer
//!
//! Frame layout: the options grid, then the status line and help bar.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::components::{HelpBar, MessageType, StatusLine};
use crate::input::Phase;

pub struct UiState<'a> {
    pub phase: Phase,
    pub sequence: &'a str,
    pub options: &'a str,
    pub message: Option<(&'a str, MessageType)>,
    pub binding_count: usize,
    pub escape_exits: bool,
}

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &UiState) {
        let size = frame.area();
        let chunks = create_main_layout(size);

        render_options(frame, chunks[0], state);
        render_status_line(frame, chunks[1], state);
        frame.render_widget(HelpBar::for_session(state.escape_exits), chunks[2]);
    }
}

fn create_main_layout(size: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size)
}

fn render_options(frame: &mut Frame, area: Rect, state: &UiState) {
    let border_color = match state.phase {
        Phase::Root => Color::Magenta,
        Phase::Positioned => Color::Green,
        Phase::Invalid => Color::Red,
    };

    let block = Block::default()
        .title(" Modali ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(state.options).block(block), area);
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState) {
    let mut status = StatusLine::new(state.phase, state.sequence).binding_count(state.binding_count);

    if let Some((msg, msg_type)) = state.message {
        status = status.message(msg, msg_type);
    }

    frame.render_widget(status, area);
}
