//! Common utilities for research console tests

use ratatui::{backend::TestBackend, Terminal};
use research_console::app::App;
use research_console::config::Config;
use research_console::ui::ui;
use research_console_sdk::{
    async_trait, Assessment, PipelineError, PipelineResult, Report, ResearchPipeline,
    ResearchRequest, ResearchResponse, ResearchSection, Task,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::runtime::Handle;
use tokio::sync::Notify;

/// In-memory pipeline that records requests and replays a fixed outcome
pub struct MockPipeline {
    outcome: PipelineResult<ResearchResponse>,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ResearchRequest>>,
}

impl MockPipeline {
    pub fn succeeding(response: ResearchResponse) -> Arc<Self> {
        Arc::new(Self::new(Ok(response), None))
    }

    pub fn failing(error: PipelineError) -> Arc<Self> {
        Arc::new(Self::new(Err(error), None))
    }

    /// Pipeline whose requests stay outstanding until the returned gate is notified
    pub fn gated(outcome: PipelineResult<ResearchResponse>) -> (Arc<Self>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        (Arc::new(Self::new(outcome, Some(gate.clone()))), gate)
    }

    fn new(outcome: PipelineResult<ResearchResponse>, gate: Option<Arc<Notify>>) -> Self {
        Self {
            outcome,
            gate,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ResearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResearchPipeline for MockPipeline {
    fn endpoint(&self) -> &str {
        "http://mock.local/api/research"
    }

    async fn run(&self, request: ResearchRequest) -> PipelineResult<ResearchResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.outcome.clone()
    }
}

/// Pipeline whose request task dies without answering
pub struct PanickingPipeline;

#[async_trait]
impl ResearchPipeline for PanickingPipeline {
    fn endpoint(&self) -> &str {
        "http://mock.local/api/research"
    }

    async fn run(&self, _request: ResearchRequest) -> PipelineResult<ResearchResponse> {
        panic!("backend task crashed");
    }
}

pub const EXECUTIVE_SUMMARY: &str = "iPhone 16 demand stays strong in premium segments.";

/// Build a response with `tasks` tasks and `gaps` identified gaps
pub fn sample_response(tasks: usize, gaps: usize) -> ResearchResponse {
    let priorities = [9, 7, 6, 3];
    ResearchResponse {
        tasks: (0..tasks)
            .map(|i| Task {
                description: format!("Research task {}", i + 1),
                priority: priorities[i % priorities.len()],
                kind: Some("research".to_string()),
            })
            .collect(),
        report: Report {
            executive_summary: EXECUTIVE_SUMMARY.to_string(),
            research_sections: (0..tasks)
                .map(|i| ResearchSection {
                    task: format!("Research task {}", i + 1),
                    summary: format!("Summary for section {}", i + 1),
                    key_findings: vec![format!("finding {}a", i + 1), format!("finding {}b", i + 1)],
                })
                .collect(),
            overall_assessment: Assessment {
                strengths: vec!["Broad sourcing".to_string(), "Recent data".to_string(), "Clear pricing".to_string()],
                limitations: vec!["Few regional sources".to_string()],
            },
            identified_gaps: (0..gaps).map(|i| format!("Gap number {}", i + 1)).collect(),
            recommended_next_steps: vec!["Interview carriers".to_string(), "Track Q4 sales".to_string()],
        },
    }
}

pub fn test_app(pipeline: Arc<dyn ResearchPipeline>) -> App {
    App::new(Config::default(), pipeline, Handle::current())
}

/// App that already holds a successful report for `query`
pub async fn app_with_report(query: &str, response: ResearchResponse) -> App {
    let mut app = test_app(MockPipeline::succeeding(response));
    app.input_buffer = query.to_string();
    assert!(app.submit());
    app.wait_settled().await.expect("request outstanding");
    app
}

/// Draw the whole UI into a test backend and return its rows as text
pub fn render(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui(f, app)).unwrap();

    terminal
        .backend()
        .buffer()
        .content
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

pub fn screen_contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|row| row.contains(needle))
}

/// Numbers drawn in the summary stat cards, left to right
pub fn stat_card_values(screen: &[String]) -> Vec<usize> {
    let labels = screen
        .iter()
        .position(|row| row.contains("Tasks") && row.contains("Strengths") && row.contains("Gaps"))
        .expect("stat card labels on screen");
    assert!(labels > 0);

    screen[labels - 1]
        .split('│')
        .filter_map(|cell| cell.trim().parse().ok())
        .collect()
}
