//! Login form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::platform::RESET_SHORTCUT;
use crate::state::{FieldName, Form, LoginRow, SubmissionPhase};
use crate::ui::components::{render_button, ButtonState, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FORM_WIDTH: u16 = 52;
/// Fields, their messages, form error, buttons, help, plus borders
const FORM_HEIGHT: u16 = 3 + 1 + 3 + 1 + 1 + BUTTON_HEIGHT + 1 + 2;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: u128 = 80;

/// Center a `width` x `height` box in `area`, shrinking it to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn sign_in_label(phase: SubmissionPhase) -> String {
    match phase {
        SubmissionPhase::Idle => "Sign in".to_string(),
        SubmissionPhase::InFlight { started_at, .. } => {
            let frame = (started_at.elapsed().as_millis() / SPINNER_FRAME_MS) as usize
                % SPINNER_FRAMES.len();
            format!("{} Signing in...", SPINNER_FRAMES[frame])
        }
    }
}

/// Draw the login screen
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let submission = app.submission();
    let focused = form.active_field();

    let outer = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
    let block = Block::default()
        .title(Span::styled(
            " Qcheck · Sign in ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Length(3),             // Password
            Constraint::Length(1),             // Password error
            Constraint::Length(1),             // Form error
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Help text
        ])
        .split(inner);

    // Field rows 0 and 1, each followed by its message line
    for (index, name) in FieldName::ALL.into_iter().enumerate() {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunks[index * 2], field, focused == index);
        }
        draw_field_error(frame, chunks[index * 2 + 1], &form.error_message(name));
    }

    let form_error = Paragraph::new(format!(" {}", submission.error_message())).style(
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(form_error, chunks[4]);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[5]);
    render_button(
        frame,
        buttons[0],
        &sign_in_label(submission.phase()),
        ButtonState::new(
            form.focused_row() == LoginRow::SignIn,
            submission.is_in_flight(),
        ),
    );
    render_button(
        frame,
        buttons[1],
        "Forgot password?",
        ButtonState::new(
            form.focused_row() == LoginRow::ForgotPassword,
            app.is_reset_pending(),
        ),
    );

    let help = Line::from(vec![
        Span::styled(" Tab", Style::default().fg(Color::Cyan)),
        Span::raw(":next  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(":sign in  "),
        Span::styled(RESET_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(":reset"),
    ]);
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[6],
    );
}
