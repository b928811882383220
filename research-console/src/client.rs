//! HTTP client for the research endpoint

use anyhow::Result;
use research_console_sdk::{
    async_trait, PipelineError, PipelineResult, ResearchPipeline, ResearchRequest,
    ResearchResponse,
};
use std::time::Duration;

pub struct HttpPipeline {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPipeline {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ResearchPipeline for HttpPipeline {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn run(&self, request: ResearchRequest) -> PipelineResult<ResearchResponse> {
        tracing::debug!(endpoint = %self.endpoint, "POST research request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| PipelineError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PipelineError::Transport(e.to_string()))?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "research response received");

        if !status.is_success() {
            return Err(PipelineError::Status {
                status: status.as_u16(),
                body,
            });
        }

        ResearchResponse::from_json(&body)
    }
}
