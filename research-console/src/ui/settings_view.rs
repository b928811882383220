//! Configuration and pipeline information view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{token_color, ACCENT, TEXT, TEXT_DIM};
use crate::app::App;
use crate::config::PIPELINE_ENV_TEMPLATE;
use crate::stages::STAGES;

pub fn render_settings(f: &mut Frame, area: Rect, app: &App) {
    let env_lines = PIPELINE_ENV_TEMPLATE.lines().count() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(env_lines + 4),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    let mut env = vec![
        Line::from(Span::styled(
            "Set these where the research backend runs:",
            Style::default().fg(TEXT_DIM),
        )),
        Line::from(""),
    ];
    env.extend(
        PIPELINE_ENV_TEMPLATE
            .lines()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(ACCENT)))),
    );
    f.render_widget(
        Paragraph::new(env).block(section_block(" Environment Configuration ")),
        chunks[0],
    );

    let config = &app.config;
    let timeout = config
        .request_timeout
        .map(|t| format!("{}s", t.as_secs()))
        .unwrap_or_else(|| "none".to_string());
    let console = vec![
        setting("Endpoint", config.endpoint.clone()),
        setting("Stage cadence", format!("{} ms", config.tick_interval.as_millis())),
        setting("Request timeout", timeout),
        setting("Log file", config.log_file.display().to_string()),
    ];
    f.render_widget(
        Paragraph::new(console)
            .block(section_block(" Console "))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let agents: Vec<Line> = STAGES
        .iter()
        .map(|stage| {
            Line::from(vec![
                Span::styled(
                    format!("{} {:<14}", stage.icon, stage.label),
                    Style::default()
                        .fg(token_color(stage.color))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(stage.model, Style::default().fg(TEXT_DIM)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(agents).block(section_block(" Pipeline Agents ")),
        chunks[2],
    );
}

fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
        .title(Span::styled(
            title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
}

fn setting(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), Style::default().fg(TEXT_DIM)),
        Span::styled(value, Style::default().fg(TEXT)),
    ])
}
