//! Help overlay listing the controls.
//!
//! Toggled by '?', dismissed by '?' or any mouse click.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const HELP_WIDTH: u16 = 44;
const HELP_HEIGHT: u16 = 12;

/// Render the help overlay centred on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    frame.render_widget(Clear, popup);

    let content = vec![
        Line::raw(""),
        key_line("Enter / Space / o", "open the envelope"),
        key_line("r", "reset (play everything backwards)"),
        key_line("z / click letter", "zoom the letter"),
        key_line("click envelope", "open the envelope"),
        Line::raw(""),
        key_line("?", "toggle this help"),
        key_line("q / Esc / Ctrl+C", "quit"),
        Line::raw(""),
        Line::styled("press ? to close", Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
    ];

    let help = Paragraph::new(content).block(
        Block::default()
            .title(" Controls ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(help, popup);
}

fn key_line(keys: &str, what: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{keys:<18}"), Style::default().fg(Color::Cyan)),
        Span::raw(what.to_string()),
    ])
}

/// A `w × h` rect centred in `area`, clamped to fit.
fn centered_rect(w: u16, h: u16, area: Rect) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
