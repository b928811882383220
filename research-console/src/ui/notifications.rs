//! Notification rendering for user-visible feedback

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::components::centered_rect;
use crate::app::{App, NotificationLevel};

fn level_style(level: NotificationLevel) -> (Color, Color, &'static str) {
    match level {
        NotificationLevel::Error => (Color::Red, Color::White, "✗"),
        NotificationLevel::Success => (Color::Green, Color::White, "✓"),
    }
}

/// Render active toasts as an overlay at the bottom of `area`
pub fn render_notifications(f: &mut Frame, app: &App, area: Rect) {
    let notifications = app.notifications.get_active();

    if notifications.is_empty() {
        return;
    }

    // 3 lines per notification, at most 3 visible
    let visible = notifications.len().min(3);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length((visible * 3) as u16),
        ])
        .split(area);

    let notification_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..visible).map(|_| Constraint::Length(3)).collect::<Vec<_>>())
        .split(chunks[1]);

    for (idx, notification) in notifications.iter().rev().take(visible).enumerate() {
        let (bg_color, fg_color, icon) = level_style(notification.level);

        let text = vec![Line::from(vec![
            Span::styled(
                format!("{} {} ", icon, notification.title),
                Style::default()
                    .fg(fg_color)
                    .bg(bg_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(notification.message.as_str()),
        ])];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(bg_color));

        let area = notification_chunks[idx];
        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), area);
    }
}

/// Render the oldest blocking notification as a modal
pub fn render_blocking_notification(f: &mut Frame, area: Rect, app: &App) {
    let Some(notification) = app.notifications.blocking() else {
        return;
    };
    let (color, _, icon) = level_style(notification.level);
    let popup_area = centered_rect(60, 30, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {}", icon, notification.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            notification.message.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Enter/Esc]",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Dismiss"),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}
