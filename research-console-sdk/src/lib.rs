// Re-export async trait for convenience
pub use async_trait::async_trait;

use serde::{Deserialize, Serialize};

/// Outbound request body for a research run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub query: String,
}

impl ResearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// A decomposed research sub-question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub priority: i64,
    /// Task kind as labelled by the task agent (always "research" today)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Findings for one task in the final report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchSection {
    pub task: String,
    pub summary: String,
    pub key_findings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub strengths: Vec<String>,
    pub limitations: Vec<String>,
}

/// Structured output of a completed pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub executive_summary: String,
    pub research_sections: Vec<ResearchSection>,
    pub overall_assessment: Assessment,
    pub identified_gaps: Vec<String>,
    pub recommended_next_steps: Vec<String>,
}

/// Successful response from the research endpoint.
///
/// Any other top-level fields the backend includes are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub tasks: Vec<Task>,
    pub report: Report,
}

impl ResearchResponse {
    /// Parse a response body, mapping any shape mismatch to a malformed payload
    pub fn from_json(body: &str) -> PipelineResult<Self> {
        serde_json::from_str(body).map_err(|e| PipelineError::MalformedPayload(e.to_string()))
    }
}

/// Errors produced while talking to the research pipeline
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("pipeline returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed pipeline payload: {0}")]
    MalformedPayload(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// The external multi-agent research service.
///
/// One call is one full pipeline run: task decomposition, retrieval,
/// synthesis, gap detection and report generation all happen behind it.
#[async_trait]
pub trait ResearchPipeline: Send + Sync {
    /// Where requests are sent, for display and diagnostics
    fn endpoint(&self) -> &str;

    /// Run the pipeline for one query and wait for the final report
    async fn run(&self, request: ResearchRequest) -> PipelineResult<ResearchResponse>;
}
