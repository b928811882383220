//! Application view routing

/// Top-level view shown in the main pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Submission,
    Report,
    Tasks,
    Gaps,
    Settings,
}

impl View {
    /// Sidebar order
    pub const ALL: [View; 5] = [
        View::Submission,
        View::Report,
        View::Tasks,
        View::Gaps,
        View::Settings,
    ];

    /// Views that only make sense once a report exists
    pub fn requires_report(self) -> bool {
        matches!(self, View::Report | View::Tasks | View::Gaps)
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Submission => "New Research",
            View::Report => "Final Report",
            View::Tasks => "Task List",
            View::Gaps => "Gap Analysis",
            View::Settings => "Config & API",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            View::Submission => "▷",
            View::Report => "▣",
            View::Tasks => "⬡",
            View::Gaps => "◑",
            View::Settings => "◈",
        }
    }
}

/// Tab within the report view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTab {
    Summary,
    Research,
    Assessment,
    Gaps,
    NextSteps,
}

impl ReportTab {
    pub const ALL: [ReportTab; 5] = [
        ReportTab::Summary,
        ReportTab::Research,
        ReportTab::Assessment,
        ReportTab::Gaps,
        ReportTab::NextSteps,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportTab::Summary => "summary",
            ReportTab::Research => "research",
            ReportTab::Assessment => "assessment",
            ReportTab::Gaps => "gaps",
            ReportTab::NextSteps => "nextsteps",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}
