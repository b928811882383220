//! Header and footer rendering functions

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::{ACCENT, TEXT_DIM};
use crate::app::{App, ReportTab, View};

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled(
            " M ",
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            "MultiAgent",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Researcher",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(logo, inner);

    let session = app.session();
    let status = if session.is_running() {
        let elapsed = session.elapsed_seconds().unwrap_or_default();
        Line::from(vec![
            Span::styled(format!("{} ", app.spinner_char()), Style::default().fg(ACCENT)),
            Span::styled("PIPELINE_ACTIVE", Style::default().fg(ACCENT)),
            Span::styled(format!("  {}s ", elapsed), Style::default().fg(TEXT_DIM)),
        ])
    } else {
        Line::from(Span::styled("SYSTEM_IDLE ", Style::default().fg(TEXT_DIM)))
    };
    f.render_widget(Paragraph::new(status).alignment(Alignment::Right), inner);
}

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::default().add_modifier(Modifier::BOLD))
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer_text = if app.notifications.blocking().is_some() {
        Line::from(vec![key("[Enter/Esc]"), Span::raw(" Dismiss  "), key("[Ctrl+C]"), Span::raw(" Quit")])
    } else {
        match app.navigation.view {
            View::Submission => Line::from(vec![
                Span::styled("TYPE", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Span::raw(" a topic  "),
                key("[Enter]"),
                Span::raw(" Start Research  "),
                key("[Esc]"),
                Span::raw(" Clear  "),
                key("[Tab]"),
                Span::raw(" Switch View  "),
                key("[Ctrl+C]"),
                Span::raw(" Quit"),
            ]),
            View::Report if app.navigation.report_tab == ReportTab::Research => Line::from(vec![
                key("[←→/hl]"),
                Span::raw(" Tab  "),
                key("[↑↓/jk]"),
                Span::raw(" Select  "),
                key("[Enter/Space]"),
                Span::raw(" Expand/Collapse  "),
                key("[Tab]"),
                Span::raw(" Switch View  "),
                key("[Q]"),
                Span::raw(" Quit"),
            ]),
            View::Report => Line::from(vec![
                key("[←→/hl]"),
                Span::raw(" Tab  "),
                key("[Tab]"),
                Span::raw(" Switch View  "),
                key("[Q]"),
                Span::raw(" Quit"),
            ]),
            View::Tasks | View::Gaps => Line::from(vec![
                key("[↑↓/jk]"),
                Span::raw(" Scroll  "),
                key("[Tab]"),
                Span::raw(" Switch View  "),
                key("[Q]"),
                Span::raw(" Quit"),
            ]),
            View::Settings => Line::from(vec![
                key("[Tab]"),
                Span::raw(" Switch View  "),
                key("[Q]"),
                Span::raw(" Quit"),
            ]),
        }
    };

    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
