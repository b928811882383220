//! Navigation state: active view, report tab and the single open card

use super::{ReportTab, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub view: View,
    pub report_tab: ReportTab,
    /// At most one research card is expanded
    pub open_card: Option<usize>,
    /// Keyboard cursor over the research cards
    pub card_cursor: usize,
    /// Scroll offset for the task and gap lists
    pub scroll: u16,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            view: View::Submission,
            report_tab: ReportTab::Summary,
            open_card: None,
            card_cursor: 0,
            scroll: 0,
        }
    }
}

impl NavigationState {
    /// Switch the top-level view. Report-backed views are inert without a
    /// report. Returns whether the view changed.
    pub fn set_view(&mut self, view: View, has_report: bool) -> bool {
        if view.requires_report() && !has_report {
            return false;
        }
        if self.view != view {
            self.view = view;
            self.scroll = 0;
        }
        true
    }

    /// Switch the tab inside the report view; the top-level view is untouched
    pub fn set_report_tab(&mut self, tab: ReportTab) {
        self.report_tab = tab;
    }

    pub fn toggle_card(&mut self, index: usize) {
        self.open_card = if self.open_card == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_card == Some(index)
    }

    pub fn next_view(&mut self, has_report: bool) {
        self.cycle_view(has_report, 1);
    }

    pub fn previous_view(&mut self, has_report: bool) {
        self.cycle_view(has_report, View::ALL.len() - 1);
    }

    fn cycle_view(&mut self, has_report: bool, step: usize) {
        let len = View::ALL.len();
        let start = View::ALL.iter().position(|v| *v == self.view).unwrap_or(0);
        let mut idx = start;
        for _ in 0..len {
            idx = (idx + step) % len;
            if self.set_view(View::ALL[idx], has_report) {
                return;
            }
        }
    }

    pub fn next_report_tab(&mut self) {
        self.set_report_tab(self.report_tab.next());
    }

    pub fn previous_report_tab(&mut self) {
        self.set_report_tab(self.report_tab.previous());
    }

    pub fn card_down(&mut self, card_count: usize) {
        if self.card_cursor + 1 < card_count {
            self.card_cursor += 1;
        }
    }

    pub fn card_up(&mut self) {
        self.card_cursor = self.card_cursor.saturating_sub(1);
    }

    /// Scroll one line down, stopping on the last of `content_lines`
    pub fn scroll_down(&mut self, content_lines: usize) {
        let max = u16::try_from(content_lines.saturating_sub(1)).unwrap_or(u16::MAX);
        if self.scroll < max {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Forget per-report selection when a new session starts
    pub fn reset_for_new_session(&mut self) {
        self.report_tab = ReportTab::Summary;
        self.open_card = None;
        self.card_cursor = 0;
        self.scroll = 0;
        self.view = View::Submission;
    }
}
