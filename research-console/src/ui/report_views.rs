//! Report, task list and gap analysis views

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use research_console_sdk::{Report, ResearchResponse, Task};

use super::components::{
    priority_color, section_label, summary_stats, ACCENT, ACCENT_SAND, LIMITATION, STRENGTH, TEXT,
    TEXT_DIM,
};
use crate::app::{App, ReportTab};

pub fn render_report(f: &mut Frame, area: Rect, app: &App, response: &ResearchResponse) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let session = app.session();
    let mut title = vec![Span::styled(
        session.query.as_str(),
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    )];
    if let Some(at) = session.submitted_at {
        title.push(Span::styled(
            format!("   submitted {}", at.format("%H:%M:%S")),
            Style::default().fg(TEXT_DIM),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(title)), chunks[0]);

    render_report_tabs(f, chunks[1], app.navigation.report_tab);

    let report = &response.report;
    let body = chunks[2];
    match app.navigation.report_tab {
        ReportTab::Summary => render_summary(f, body, report, &response.tasks),
        ReportTab::Research => render_research_cards(f, body, app, report),
        ReportTab::Assessment => render_assessment(f, body, report),
        ReportTab::Gaps => render_bullets(f, body, "IDENTIFIED GAPS", "◑", &report.identified_gaps),
        ReportTab::NextSteps => render_next_steps(f, body, report),
    }
}

fn render_report_tabs(f: &mut Frame, area: Rect, active: ReportTab) {
    let mut spans = Vec::new();
    for tab in ReportTab::ALL {
        let style = if tab == active {
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(TEXT_DIM)
        };
        spans.push(Span::styled(format!(" {} ", tab.label().to_uppercase()), style));
        spans.push(Span::raw("  "));
    }

    let separator = Line::from(Span::styled(
        "━".repeat(area.width as usize),
        Style::default().fg(TEXT_DIM),
    ));
    f.render_widget(Paragraph::new(vec![Line::from(spans), separator]), area);
}

fn render_summary(f: &mut Frame, area: Rect, report: &Report, tasks: &[Task]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let stats = summary_stats(report, tasks);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[0]);

    for (card, (value, label)) in cards.iter().zip([
        (stats.tasks, "Tasks"),
        (stats.strengths, "Strengths"),
        (stats.gaps, "Gaps"),
    ]) {
        let text = vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(TEXT_DIM))),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEXT_DIM));
        f.render_widget(Paragraph::new(text).block(block), *card);
    }

    let summary = Paragraph::new(report.executive_summary.as_str())
        .style(Style::default().fg(TEXT))
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .border_style(Style::default().fg(ACCENT))
                .title(" EXECUTIVE SUMMARY "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(summary, chunks[1]);
}

fn render_research_cards(f: &mut Frame, area: Rect, app: &App, report: &Report) {
    let nav = &app.navigation;
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0usize;

    if report.research_sections.is_empty() {
        lines.push(Line::from(Span::styled(
            "No research sections in this report",
            Style::default().fg(TEXT_DIM),
        )));
    }

    for (i, section) in report.research_sections.iter().enumerate() {
        let is_open = nav.is_open(i);
        let is_selected = nav.card_cursor == i;
        if is_selected {
            cursor_line = lines.len();
        }

        let title_style = if is_selected {
            Style::default()
                .fg(TEXT)
                .bg(ratatui::style::Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
        };

        lines.push(Line::from(vec![
            Span::styled(
                if is_open { "▼ " } else { "▶ " },
                Style::default().fg(TEXT_DIM),
            ),
            Span::styled(format!("{}  ", section_label(i)), Style::default().fg(ACCENT)),
            Span::styled(section.task.as_str(), title_style),
        ]));

        if is_open {
            lines.push(Line::from(Span::styled(
                format!("      {}", section.summary),
                Style::default().fg(TEXT).add_modifier(Modifier::ITALIC),
            )));
            let mut pills = vec![Span::raw("      ")];
            for finding in &section.key_findings {
                pills.push(Span::styled(
                    format!("[{}]", finding),
                    Style::default().fg(ACCENT),
                ));
                pills.push(Span::raw(" "));
            }
            lines.push(Line::from(pills));
        }
        lines.push(Line::from(""));
    }

    // Keep the selected card's header in view, counting wrapped rows
    let before_cursor = Paragraph::new(lines[..cursor_line].to_vec())
        .wrap(Wrap { trim: false })
        .line_count(area.width);
    let visible = area.height as usize;
    let scroll = if visible > 0 && before_cursor + 3 > visible {
        u16::try_from(before_cursor + 3 - visible).unwrap_or(u16::MAX)
    } else {
        0
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);
}

fn render_assessment(f: &mut Frame, area: Rect, report: &Report) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let assessment = &report.overall_assessment;
    for (column, (title, items, color)) in columns.iter().zip([
        ("STRENGTHS", &assessment.strengths, STRENGTH),
        ("LIMITATIONS", &assessment.limitations, LIMITATION),
    ]) {
        let lines: Vec<Line> = items
            .iter()
            .map(|item| Line::from(format!("• {}", item)))
            .collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(format!(" {} ", title), Style::default().fg(color)));
        f.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(TEXT))
                .block(block)
                .wrap(Wrap { trim: true }),
            *column,
        );
    }
}

fn render_bullets(f: &mut Frame, area: Rect, title: &str, icon: &str, items: &[String]) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} ({})", title, items.len()),
            Style::default().fg(ACCENT_SAND).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if items.is_empty() {
        lines.push(Line::from(Span::styled("None reported", Style::default().fg(TEXT_DIM))));
    }
    for item in items {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(ACCENT_SAND)),
            Span::styled(item.as_str(), Style::default().fg(TEXT)),
        ]));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_next_steps(f: &mut Frame, area: Rect, report: &Report) {
    let mut lines = vec![
        Line::from(Span::styled(
            "RECOMMENDED NEXT STEPS",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (i, step) in report.recommended_next_steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:02} → ", i + 1), Style::default().fg(ACCENT)),
            Span::styled(step.as_str(), Style::default().fg(TEXT)),
        ]));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn task_lines(tasks: &[Task]) -> Vec<Line<'_>> {
    let mut lines: Vec<Line> = Vec::new();

    for task in tasks {
        let mut spans = vec![
            Span::styled("▌ ", Style::default().fg(priority_color(task.priority))),
            Span::styled(task.description.as_str(), Style::default().fg(TEXT)),
            Span::styled(
                format!("   PRIORITY: {}", task.priority),
                Style::default().fg(TEXT_DIM),
            ),
        ];
        if let Some(kind) = &task.kind {
            spans.push(Span::styled(format!("  [{}]", kind), Style::default().fg(TEXT_DIM)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines
}

/// Rows in the task list before wrapping
pub fn task_list_height(tasks: &[Task]) -> usize {
    task_lines(tasks).len()
}

pub fn render_task_list(f: &mut Frame, area: Rect, app: &App, tasks: &[Task]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
        .title(format!(" TASK LIST ({}) ", tasks.len()));
    f.render_widget(
        Paragraph::new(task_lines(tasks))
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((app.navigation.scroll, 0)),
        area,
    );
}

fn gap_lines(report: &Report) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("IDENTIFIED GAPS ({})", report.identified_gaps.len()),
            Style::default().fg(ACCENT_SAND).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for gap in &report.identified_gaps {
        lines.push(Line::from(vec![
            Span::styled("◑ ", Style::default().fg(ACCENT_SAND)),
            Span::styled(gap.as_str(), Style::default().fg(TEXT)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "LIMITATIONS",
        Style::default().fg(LIMITATION).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    for limitation in &report.overall_assessment.limitations {
        lines.push(Line::from(format!("• {}", limitation)));
    }
    lines
}

/// Rows in the gap analysis before wrapping
pub fn gap_analysis_height(report: &Report) -> usize {
    gap_lines(report).len()
}

pub fn render_gap_analysis(f: &mut Frame, area: Rect, app: &App, report: &Report) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
        .title(" GAP ANALYSIS ");
    f.render_widget(
        Paragraph::new(gap_lines(report))
            .style(Style::default().fg(TEXT))
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((app.navigation.scroll, 0)),
        area,
    );
}
