//! Research session lifecycle
//!
//! Exactly one session exists at a time. `submit` starts a single background
//! request; the UI loop calls `poll` to pick up its outcome. While a request
//! is outstanding every further submission is rejected.

use chrono::{DateTime, Local};
use research_console_sdk::{
    PipelineError, PipelineResult, Report, ResearchPipeline, ResearchRequest, ResearchResponse,
    Task,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Lifecycle of the current session.
///
/// The report lives inside `Succeeded`, so it exists exactly when the run
/// succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    Idle,
    Running,
    Succeeded(Box<ResearchResponse>),
    Failed(PipelineError),
}

/// Terminal outcome of one submission, reported once by `poll`
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Succeeded,
    Failed(PipelineError),
}

#[derive(Debug)]
pub struct ResearchSession {
    pub id: Uuid,
    /// Query as submitted (the input buffer may change afterwards)
    pub query: String,
    pub status: SessionStatus,
    pub submitted_at: Option<DateTime<Local>>,
    pub started: Option<Instant>,
}

impl Default for ResearchSession {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            query: String::new(),
            status: SessionStatus::Idle,
            submitted_at: None,
            started: None,
        }
    }
}

impl ResearchSession {
    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn response(&self) -> Option<&ResearchResponse> {
        match &self.status {
            SessionStatus::Succeeded(response) => Some(response),
            _ => None,
        }
    }

    pub fn report(&self) -> Option<&Report> {
        self.response().map(|r| &r.report)
    }

    pub fn tasks(&self) -> Option<&[Task]> {
        self.response().map(|r| r.tasks.as_slice())
    }

    pub fn error(&self) -> Option<&PipelineError> {
        match &self.status {
            SessionStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Seconds since submission while running
    pub fn elapsed_seconds(&self) -> Option<u64> {
        if !self.is_running() {
            return None;
        }
        self.started.map(|start| start.elapsed().as_secs())
    }
}

pub struct SessionController {
    pipeline: Arc<dyn ResearchPipeline>,
    handle: Handle,
    session: ResearchSession,
    outcome_rx: Option<mpsc::UnboundedReceiver<PipelineResult<ResearchResponse>>>,
}

impl SessionController {
    pub fn new(pipeline: Arc<dyn ResearchPipeline>, handle: Handle) -> Self {
        Self {
            pipeline,
            handle,
            session: ResearchSession::default(),
            outcome_rx: None,
        }
    }

    pub fn session(&self) -> &ResearchSession {
        &self.session
    }

    pub fn endpoint(&self) -> &str {
        self.pipeline.endpoint()
    }

    /// Submit a query. Returns false (and changes nothing) when the query is
    /// blank or a request is already outstanding.
    pub fn submit(&mut self, query: &str) -> bool {
        if query.trim().is_empty() {
            tracing::debug!("ignoring blank research query");
            return false;
        }
        if self.session.is_running() {
            tracing::debug!(session_id = %self.session.id, "submission rejected, request outstanding");
            return false;
        }

        let id = Uuid::new_v4();
        self.session = ResearchSession {
            id,
            query: query.to_string(),
            status: SessionStatus::Running,
            submitted_at: Some(Local::now()),
            started: Some(Instant::now()),
        };

        tracing::info!(session_id = %id, query = %query, endpoint = %self.pipeline.endpoint(), "research submitted");

        let (tx, rx) = mpsc::unbounded_channel();
        self.outcome_rx = Some(rx);

        let pipeline = Arc::clone(&self.pipeline);
        let request = ResearchRequest::new(query);
        self.handle.spawn(async move {
            let result = pipeline.run(request).await;
            // Receiver is gone only if the controller was dropped
            let _ = tx.send(result);
        });

        true
    }

    /// Non-blocking check for the outstanding request's outcome
    pub fn poll(&mut self) -> Option<SessionEvent> {
        let rx = self.outcome_rx.as_mut()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(mpsc::error::TryRecvError::Empty) => return None,
            Err(mpsc::error::TryRecvError::Disconnected) => Err(PipelineError::Transport(
                "request task ended without a response".to_string(),
            )),
        };
        Some(self.settle(result))
    }

    /// Wait for the outstanding request to settle
    pub async fn wait(&mut self) -> Option<SessionEvent> {
        let rx = self.outcome_rx.as_mut()?;
        let result = rx.recv().await.unwrap_or_else(|| {
            Err(PipelineError::Transport(
                "request task ended without a response".to_string(),
            ))
        });
        Some(self.settle(result))
    }

    fn settle(&mut self, result: PipelineResult<ResearchResponse>) -> SessionEvent {
        self.outcome_rx = None;
        let elapsed_ms = self
            .session
            .started
            .map(|s| s.elapsed().as_millis())
            .unwrap_or_default();

        match result {
            Ok(response) => {
                tracing::info!(
                    session_id = %self.session.id,
                    tasks = response.tasks.len(),
                    sections = response.report.research_sections.len(),
                    gaps = response.report.identified_gaps.len(),
                    elapsed_ms = elapsed_ms as u64,
                    "research succeeded"
                );
                self.session.status = SessionStatus::Succeeded(Box::new(response));
                SessionEvent::Succeeded
            }
            Err(err) => {
                tracing::error!(
                    session_id = %self.session.id,
                    error = %err,
                    elapsed_ms = elapsed_ms as u64,
                    "research failed"
                );
                self.session.status = SessionStatus::Failed(err.clone());
                SessionEvent::Failed(err)
            }
        }
    }
}
