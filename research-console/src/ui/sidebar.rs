//! Sidebar: navigation list and the live pipeline track

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{token_color, ACCENT, TEXT, TEXT_DIM};
use crate::app::{App, View};
use crate::stages::STAGES;

pub fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(View::ALL.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    render_navigation(f, chunks[0], app);
    render_pipeline_track(f, chunks[1], app);
}

fn render_navigation(f: &mut Frame, area: Rect, app: &App) {
    let has_report = app.has_report();

    let lines: Vec<Line> = View::ALL
        .iter()
        .map(|view| {
            let disabled = view.requires_report() && !has_report;
            let active = app.navigation.view == *view;

            let style = if disabled {
                Style::default().fg(TEXT_DIM).add_modifier(Modifier::DIM)
            } else if active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT)
            };
            let marker = if active { "▌" } else { " " };

            Line::from(vec![
                Span::styled(marker, Style::default().fg(ACCENT)),
                Span::styled(format!(" {}  {}", view.icon(), view.label()), style),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
        .title(" NAVIGATION ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_pipeline_track(f: &mut Frame, area: Rect, app: &App) {
    let current = app.ticker.current_stage();
    let mut lines: Vec<Line> = Vec::new();

    for (i, stage) in STAGES.iter().enumerate() {
        let color = token_color(stage.color);
        let active = current == Some(i);

        let (dot, name_style) = if active {
            (
                "●",
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::default().fg(TEXT))
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", dot), Style::default().fg(color)),
            Span::styled(stage.label, name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", stage.description),
            Style::default().fg(TEXT_DIM),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
        .title(" LIVE PIPELINE ");
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
