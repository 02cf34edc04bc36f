//! Form buttons

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// How a button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Focused,
    /// Its action is outstanding; pressing it does nothing
    Busy,
}

impl ButtonState {
    pub fn new(focused: bool, busy: bool) -> Self {
        match (busy, focused) {
            (true, _) => Self::Busy,
            (false, true) => Self::Focused,
            (false, false) => Self::Normal,
        }
    }

    fn border_style(self) -> Style {
        match self {
            Self::Normal => Style::default().fg(Color::DarkGray),
            Self::Focused => Style::default().fg(Color::Cyan),
            Self::Busy => Style::default().fg(Color::Yellow),
        }
    }

    fn label_style(self) -> Style {
        match self {
            Self::Normal => Style::default(),
            Self::Focused => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Self::Busy => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::DIM),
        }
    }
}

pub fn render_button(frame: &mut Frame, area: Rect, label: &str, state: ButtonState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(state.border_style());
    let paragraph = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(state.label_style())
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_busy_wins_over_focus() {
        assert_eq!(ButtonState::new(true, true), ButtonState::Busy);
        assert_eq!(ButtonState::new(true, false), ButtonState::Focused);
        assert_eq!(ButtonState::new(false, false), ButtonState::Normal);
    }

    #[test]
    fn test_label_is_centered_inside_border() {
        let mut terminal = Terminal::new(TestBackend::new(20, BUTTON_HEIGHT)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_button(frame, area, "Go", ButtonState::Focused);
            })
            .unwrap();
        let middle: String = terminal.backend().buffer().content()[20..40]
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert_eq!(middle, format!("│{}Go{}│", " ".repeat(8), " ".repeat(8)));
    }
}
