//! Query submission view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{ACCENT, LIMITATION, TEXT, TEXT_DIM};
use crate::app::App;

const PLACEHOLDER: &str = "Enter a research topic (e.g., iPhone 16 market trends)...";

pub fn render_submission(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let hero = Paragraph::new(Line::from(vec![
        Span::styled(
            "Autonomous research, ",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "5 agents deep.",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(hero, chunks[0]);

    let session = app.session();
    let input = if app.input_buffer.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(TEXT_DIM)))
    } else {
        Line::from(vec![
            Span::styled(app.input_buffer.as_str(), Style::default().fg(TEXT)),
            Span::styled("█", Style::default().fg(ACCENT)),
        ])
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Research topic ");
    f.render_widget(Paragraph::new(input).block(input_block), chunks[1]);

    let action = if session.is_running() {
        Line::from(vec![
            Span::styled(format!("{} ", app.spinner_char()), Style::default().fg(ACCENT)),
            Span::styled(
                format!(
                    "Running pipeline... {}s",
                    session.elapsed_seconds().unwrap_or_default()
                ),
                Style::default().fg(TEXT_DIM),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("[Enter]", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                " ▷ START RESEARCH",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ])
    };
    f.render_widget(Paragraph::new(action), chunks[2]);

    if session.error().is_some() {
        let hint = Paragraph::new(Line::from(Span::styled(
            format!(
                "Last run for \"{}\" failed. Press Enter to try again.",
                session.query
            ),
            Style::default().fg(LIMITATION),
        )))
        .wrap(Wrap { trim: true });
        f.render_widget(hint, chunks[3]);
    }
}
