//! Keyboard input routing

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::*;
use crate::ui::{gap_analysis_height, task_list_height};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        // A blocking notification swallows everything until dismissed
        if self.notifications.blocking().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notifications.dismiss_blocking();
            }
            return;
        }

        let has_report = self.has_report();
        match key.code {
            KeyCode::Tab => self.navigation.next_view(has_report),
            KeyCode::BackTab => self.navigation.previous_view(has_report),
            _ => match self.navigation.view {
                View::Submission => self.handle_submission_key(key),
                View::Report => self.handle_report_key(key),
                View::Tasks | View::Gaps => self.handle_list_key(key),
                View::Settings => {
                    if key.code == KeyCode::Char('q') {
                        self.should_quit = true;
                    }
                }
            },
        }
    }

    fn handle_submission_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Esc => {
                self.input_buffer.clear();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    fn handle_report_key(&mut self, key: KeyEvent) {
        let card_count = self
            .session()
            .report()
            .map(|r| r.research_sections.len())
            .unwrap_or_default();
        let on_research = self.navigation.report_tab == ReportTab::Research;

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.navigation.previous_report_tab(),
            KeyCode::Right | KeyCode::Char('l') => self.navigation.next_report_tab(),
            KeyCode::Down | KeyCode::Char('j') if on_research => {
                self.navigation.card_down(card_count)
            }
            KeyCode::Up | KeyCode::Char('k') if on_research => self.navigation.card_up(),
            KeyCode::Enter | KeyCode::Char(' ') if on_research && card_count > 0 => {
                let cursor = self.navigation.card_cursor;
                self.navigation.toggle_card(cursor);
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let content_lines = match (self.navigation.view, self.session().response()) {
            (View::Tasks, Some(response)) => task_list_height(&response.tasks),
            (View::Gaps, Some(response)) => gap_analysis_height(&response.report),
            _ => 0,
        };

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.navigation.scroll_down(content_lines),
            KeyCode::Up | KeyCode::Char('k') => self.navigation.scroll_up(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}
