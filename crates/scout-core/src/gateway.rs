//! AI Gateway Abstraction
//!
//! Defines a common interface to the external generative-language service:
//! one prompt in, free text plus grounding source URLs out. The analysis
//! pipeline works exclusively through this interface, so the backing service
//! (or the scripted mock) can be swapped without touching pipeline logic.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};

/// A single search-grounded generation request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroundedRequest {
    /// Full prompt text sent to the model
    pub prompt: String,

    /// Ask the service to consult web search while answering
    #[serde(default = "default_web_search")]
    pub web_search: bool,

    /// Sampling temperature (0.0 = deterministic)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_web_search() -> bool {
    true
}
fn default_temperature() -> f32 {
    0.3
}

impl GroundedRequest {
    /// Create a request with grounding enabled and the default temperature
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            web_search: default_web_search(),
            temperature: default_temperature(),
        }
    }

    /// Set the sampling temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Toggle web-search grounding
    #[must_use]
    pub fn with_web_search(mut self, enabled: bool) -> Self {
        self.web_search = enabled;
        self
    }
}

/// Reply from the gateway
///
/// An empty `text` is a valid reply, not an error; downstream normalization
/// treats it like any other unstructured output.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GroundedReply {
    /// Raw model text
    pub text: String,

    /// URLs of web sources the model consulted, in reply order
    pub sources: Vec<String>,
}

impl GroundedReply {
    /// Create a reply with text and no sources
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sources: Vec::new(),
        }
    }
}

/// Strategy trait for AI gateways
///
/// Implement this for each backing service (Gemini, a local model, a mock).
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Send one prompt and collect the full reply
    async fn generate(&self, request: &GroundedRequest) -> Result<GroundedReply>;

    /// Check if the gateway is reachable and configured correctly
    async fn health_check(&self) -> Result<bool>;

    /// Gateway name for logs and health output
    fn name(&self) -> &str;
}

// ============================================================================
// Mock Gateway
// ============================================================================

/// Scripted gateway for tests and offline demos
///
/// Replies are served in the order they were queued; once the script runs
/// dry every call fails like an unreachable service. Received requests are
/// recorded for inspection.
#[derive(Default)]
pub struct MockGateway {
    script: Mutex<VecDeque<Result<GroundedReply>>>,
    seen: Mutex<Vec<GroundedRequest>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a single text-only reply queued
    pub fn with_text(text: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.push_reply(GroundedReply::text_only(text));
        mock
    }

    /// Queue a full reply
    pub fn push_reply(&self, reply: GroundedReply) {
        self.script.lock().unwrap().push_back(Ok(reply));
    }

    /// Queue a failure
    pub fn push_failure(&self, error: ScoutError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Requests received so far, in call order
    pub fn requests(&self) -> Vec<GroundedRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiGateway for MockGateway {
    async fn generate(&self, request: &GroundedRequest) -> Result<GroundedReply> {
        self.seen.lock().unwrap().push(request.clone());

        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ScoutError::GatewayUnavailable("script exhausted".into())))
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(!self.script.lock().unwrap().is_empty())
    }

    fn name(&self) -> &str {
        "MockGateway"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = GroundedRequest::new("hello");
        assert!(request.web_search);
        assert!((request.temperature - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_request_builder() {
        let request = GroundedRequest::new("hello")
            .with_temperature(0.9)
            .with_web_search(false);
        assert!((request.temperature - 0.9).abs() < f32::EPSILON);
        assert!(!request.web_search);
    }

    #[tokio::test]
    async fn test_mock_replies_in_order() {
        let mock = MockGateway::new();
        mock.push_reply(GroundedReply::text_only("first"));
        mock.push_reply(GroundedReply {
            text: "second".into(),
            sources: vec!["https://example.com".into()],
        });

        let first = mock.generate(&GroundedRequest::new("a")).await.unwrap();
        assert_eq!(first.text, "first");
        assert!(first.sources.is_empty());

        let second = mock.generate(&GroundedRequest::new("b")).await.unwrap();
        assert_eq!(second.text, "second");
        assert_eq!(second.sources.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_fails_when_script_exhausted() {
        let mock = MockGateway::new();
        let result = mock.generate(&GroundedRequest::new("a")).await;
        assert!(matches!(result, Err(ScoutError::GatewayUnavailable(_))));
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mock = MockGateway::with_text("ok");
        let request = GroundedRequest::new("what is this").with_temperature(0.2);
        mock.generate(&request).await.unwrap();

        let seen = mock.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].prompt, "what is this");
        assert!((seen[0].temperature - 0.2).abs() < f32::EPSILON);
    }
}
