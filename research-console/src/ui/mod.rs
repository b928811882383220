//! UI rendering functions for the research console TUI
//!
//! Every renderer takes `&App` and draws; none of them mutate state.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, View};

// Module declarations
mod header_footer;
mod notifications;
mod report_views;
mod settings_view;
mod sidebar;
mod submission_view;
pub mod components;

// Re-export public functions
pub use header_footer::{render_footer, render_header};
pub use notifications::{render_blocking_notification, render_notifications};
pub use report_views::{
    gap_analysis_height, render_gap_analysis, render_report, render_task_list, task_list_height,
};
pub use settings_view::render_settings;
pub use sidebar::render_sidebar;
pub use submission_view::render_submission;

const SIDEBAR_WIDTH: u16 = 36;

/// Main UI rendering function - orchestrates all view rendering
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    render_sidebar(f, body[0], app);

    // Report-backed views only render with a report; navigation keeps them
    // unreachable otherwise
    let main = body[1];
    match (app.navigation.view, app.session().response()) {
        (View::Report, Some(response)) => render_report(f, main, app, response),
        (View::Tasks, Some(response)) => render_task_list(f, main, app, &response.tasks),
        (View::Gaps, Some(response)) => render_gap_analysis(f, main, app, &response.report),
        (View::Settings, _) => render_settings(f, main, app),
        _ => render_submission(f, main, app),
    }

    render_footer(f, chunks[2], app);

    render_notifications(f, app, main);

    if app.notifications.blocking().is_some() {
        render_blocking_notification(f, f.area(), app);
    }
}
