//! Gemini AI Gateway
//!
//! Implementation of `AiGateway` for the Google generative-language REST
//! API. Web-search grounding is requested through the `googleSearch` tool;
//! source URLs come back in the candidate's grounding metadata.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use scout_core::{
    error::{Result, ScoutError},
    gateway::{AiGateway, GroundedReply, GroundedRequest},
};

/// Gemini gateway configuration
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    /// API key; calls fail with a configuration error when unset
    pub api_key: Option<String>,

    /// REST API base URL
    pub base_url: String,

    /// Model identifier
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
            model: "gemini-2.5-flash".into(),
            timeout_secs: 120,
        }
    }
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").ok();
        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into());
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".into());
        let timeout_secs = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(120);

        Self {
            api_key,
            base_url,
            model,
            timeout_secs,
        }
    }
}

/// Gemini AI gateway
pub struct GeminiGateway {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    /// Create from configuration
    pub fn from_config(config: GeminiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ScoutError::Config(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(GeminiConfig::from_env())
    }

    /// Build the wire request for a grounded generation
    fn build_request(request: &GroundedRequest) -> GenerateContentRequest {
        let tools = request.web_search.then(|| {
            vec![ToolSpec {
                google_search: EmptyConfig {},
            }]
        });

        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            tools,
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }

    /// Convert the wire response to a gateway reply
    ///
    /// A response with no candidates or no text parts yields an empty reply;
    /// that is not an error here.
    fn convert_reply(response: GenerateContentResponse) -> GroundedReply {
        let Some(candidate) = response.candidates.into_iter().next() else {
            return GroundedReply::default();
        };

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let sources = candidate
            .grounding_metadata
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web.and_then(|web| web.uri))
                    .collect()
            })
            .unwrap_or_default();

        GroundedReply { text, sources }
    }

    /// Map a non-success HTTP status to a pipeline error
    fn error_for_status(status: StatusCode, body: &str) -> ScoutError {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .map_or_else(|| status.to_string(), |e| e.message);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ScoutError::Auth(message),
            StatusCode::TOO_MANY_REQUESTS => ScoutError::RateLimited(message),
            _ => ScoutError::Gateway(message),
        }
    }
}

#[async_trait]
impl AiGateway for GeminiGateway {
    async fn generate(&self, request: &GroundedRequest) -> Result<GroundedReply> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ScoutError::Config("GEMINI_API_KEY is not set".into()))?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&Self::build_request(request))
            .send()
            .await
            .map_err(|e| ScoutError::GatewayUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ScoutError::Gateway(format!("invalid response body: {e}")))?;

        Ok(Self::convert_reply(parsed))
    }

    async fn health_check(&self) -> Result<bool> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Ok(false);
        };

        let url = format!("{}/models", self.config.base_url);
        match self
            .http
            .get(&url)
            .header("x-goog-api-key", api_key)
            .send()
            .await
        {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) => {
                tracing::warn!("Gemini health check failed: {}", e);
                Ok(false)
            }
        }
    }

    fn name(&self) -> &str {
        "Gemini"
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<ToolSpec>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct ToolSpec {
    #[serde(rename = "googleSearch")]
    google_search: EmptyConfig,
}

#[derive(Debug, Serialize)]
struct EmptyConfig {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    uri: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GeminiConfig::default();
        assert_eq!(
            config.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout_secs, 120);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_build_request_with_grounding() {
        let request = GroundedRequest::new("find airdrops").with_temperature(0.4);
        let wire = GeminiGateway::build_request(&request);
        let value = serde_json::to_value(&wire).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "find airdrops");
        assert!(value["tools"][0]["googleSearch"].is_object());
        assert_eq!(value["generationConfig"]["temperature"], 0.4);
    }

    #[test]
    fn test_build_request_without_grounding() {
        let request = GroundedRequest::new("plain").with_web_search(false);
        let wire = GeminiGateway::build_request(&request);
        let value = serde_json::to_value(&wire).unwrap();

        assert!(value.get("tools").is_none());
    }

    #[test]
    fn test_convert_reply_collects_text_and_sources() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{"text": "Hello "}, {"text": "world"}]
                    },
                    "groundingMetadata": {
                        "groundingChunks": [
                            {"web": {"uri": "https://a.example", "title": "A"}},
                            {"web": {"title": "no uri"}},
                            {"retrievedContext": {}}
                        ]
                    }
                }]
            }"#,
        )
        .unwrap();

        let reply = GeminiGateway::convert_reply(response);
        assert_eq!(reply.text, "Hello world");
        assert_eq!(reply.sources, vec!["https://a.example".to_string()]);
    }

    #[test]
    fn test_convert_reply_empty_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        let reply = GeminiGateway::convert_reply(response);
        assert!(reply.text.is_empty());
        assert!(reply.sources.is_empty());
    }

    #[test]
    fn test_error_for_status_mapping() {
        let quota = GeminiGateway::error_for_status(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error": {"code": 429, "message": "quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#,
        );
        assert!(matches!(quota, ScoutError::RateLimited(m) if m == "quota exceeded"));

        let auth = GeminiGateway::error_for_status(StatusCode::FORBIDDEN, "not json");
        assert!(matches!(auth, ScoutError::Auth(_)));

        let other = GeminiGateway::error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert!(matches!(other, ScoutError::Gateway(_)));
    }

    #[tokio::test]
    async fn test_generate_requires_api_key() {
        let gateway = GeminiGateway::from_config(GeminiConfig::default()).unwrap();
        let result = gateway.generate(&GroundedRequest::new("hi")).await;
        assert!(matches!(result, Err(ScoutError::Config(_))));
    }
}
