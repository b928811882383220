//! Shared rendering helpers: palette, priority tiers, numbering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
};
use research_console_sdk::{Report, Task};

pub const ACCENT: Color = Color::Rgb(200, 247, 160);
pub const ACCENT_BLUE: Color = Color::Rgb(160, 212, 247);
pub const ACCENT_SAND: Color = Color::Rgb(247, 214, 160);
pub const STRENGTH: Color = Color::Rgb(160, 247, 180);
pub const LIMITATION: Color = Color::Rgb(247, 160, 160);
pub const TEXT: Color = Color::Rgb(232, 238, 224);
pub const TEXT_DIM: Color = Color::DarkGray;

/// Priority band used to color tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

pub fn priority_tier(priority: i64) -> PriorityTier {
    if priority >= 8 {
        PriorityTier::High
    } else if priority >= 6 {
        PriorityTier::Medium
    } else {
        PriorityTier::Low
    }
}

pub fn priority_color(priority: i64) -> Color {
    match priority_tier(priority) {
        PriorityTier::High => ACCENT,
        PriorityTier::Medium => ACCENT_BLUE,
        PriorityTier::Low => ACCENT_SAND,
    }
}

/// Stable display id for the research section at `index` ("T01", "T02", ...)
pub fn section_label(index: usize) -> String {
    format!("T{:02}", index + 1)
}

/// Parse a `#rrggbb` color token, falling back to gray
pub fn token_color(token: &str) -> Color {
    token.parse::<Color>().unwrap_or(Color::Gray)
}

/// Counters on the summary tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStats {
    pub tasks: usize,
    pub strengths: usize,
    pub gaps: usize,
}

pub fn summary_stats(report: &Report, tasks: &[Task]) -> SummaryStats {
    SummaryStats {
        tasks: tasks.len(),
        strengths: report.overall_assessment.strengths.len(),
        gaps: report.identified_gaps.len(),
    }
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
