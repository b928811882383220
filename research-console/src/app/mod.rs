//! Application state and module organization
//!
//! `App` is the one owned aggregate the renderers read from. Mutation goes
//! through the session controller, the progress ticker and the navigation
//! state; `App` only wires their join points together.

use research_console_sdk::ResearchPipeline;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::config::Config;
use crate::session::{ResearchSession, SessionController, SessionEvent};
use crate::stages::stage_count;
use crate::ticker::ProgressTicker;

mod models;
pub use models::*;

mod key_handlers;
mod notifications;
pub use notifications::{Notification, NotificationLevel, NotificationManager};

const SPINNER: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Main application state
pub struct App {
    pub config: Config,
    pub controller: SessionController,
    pub ticker: ProgressTicker,
    pub navigation: NavigationState,
    pub notifications: NotificationManager,

    /// Query being typed on the submission view
    pub input_buffer: String,
    pub spinner_frame: usize,
    pub should_quit: bool,

    handle: Handle,
}

impl App {
    pub fn new(config: Config, pipeline: Arc<dyn ResearchPipeline>, handle: Handle) -> Self {
        let ticker = ProgressTicker::new(config.tick_interval, stage_count());
        let controller = SessionController::new(pipeline, handle.clone());

        Self {
            config,
            controller,
            ticker,
            navigation: NavigationState::default(),
            notifications: NotificationManager::new(),
            input_buffer: String::new(),
            spinner_frame: 0,
            should_quit: false,
            handle,
        }
    }

    pub fn session(&self) -> &ResearchSession {
        self.controller.session()
    }

    pub fn has_report(&self) -> bool {
        self.session().report().is_some()
    }

    /// Submit the query in the input buffer.
    ///
    /// Returns false for a blank query or while a run is outstanding.
    pub fn submit(&mut self) -> bool {
        // Sent as typed; trimming only decides whether it is blank
        if !self.controller.submit(&self.input_buffer) {
            return false;
        }

        self.navigation.reset_for_new_session();
        self.ticker.start(&self.handle);
        true
    }

    /// Called once per UI frame: expire toasts and pick up a settled request
    pub fn poll(&mut self) {
        self.notifications.cleanup_expired();
        if let Some(event) = self.controller.poll() {
            self.on_settled(event);
        }
        if self.session().is_running() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        }
    }

    /// Await the outstanding request and apply its outcome
    pub async fn wait_settled(&mut self) -> Option<SessionEvent> {
        let event = self.controller.wait().await?;
        self.on_settled(event.clone());
        Some(event)
    }

    fn on_settled(&mut self, event: SessionEvent) {
        self.ticker.stop();

        match event {
            SessionEvent::Succeeded => {
                self.navigation.set_view(View::Report, self.has_report());
                let sections = self
                    .session()
                    .report()
                    .map(|r| r.research_sections.len())
                    .unwrap_or_default();
                self.notifications
                    .success("Research complete", format!("{} research sections ready", sections));
            }
            SessionEvent::Failed(_) => {
                let message = format!(
                    "Ensure the research backend is running at {}",
                    self.controller.endpoint()
                );
                self.notifications.blocking_error("Pipeline failure", message);
            }
        }
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }
}
