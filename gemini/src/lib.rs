//! Minimal Google Gemini API client.
//!
//! This crate provides a focused client for Gemini's `generateContent`
//! endpoint with:
//! - Typed request/response bodies
//! - Generation config (temperature, token limits, system instruction)
//! - A one-call `generate` helper for plain text-in/text-out use

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Errors that can occur when using the Gemini client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API key not configured")]
    NoApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Response contained no text")]
    Empty,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Gemini API client.
#[derive(Clone)]
pub struct Gemini {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl Gemini {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .connect_timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("Failed to build HTTP client"),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a Gemini client from the GEMINI_API_KEY environment variable.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| Error::NoApiKey)?;
        if api_key.is_empty() {
            return Err(Error::NoApiKey);
        }
        Ok(Self::new(api_key))
    }

    /// Set the default model for this client.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Generate text from a plain prompt and return the first candidate's text.
    pub async fn generate(&self, prompt: impl Into<String>) -> Result<String, Error> {
        let response = self.complete(Request::new(prompt)).await?;
        if response.text.is_empty() {
            return Err(Error::Empty);
        }
        Ok(response.text)
    }

    /// Send a full request and return the parsed response.
    pub async fn complete(&self, request: Request) -> Result<Response, Error> {
        let model = request.model.clone().unwrap_or_else(|| self.model.clone());
        let api_request = build_api_request(&request);
        let headers = self.build_headers()?;

        let response = self
            .client
            .post(format!("{API_BASE}/models/{model}:generateContent"))
            .headers(headers)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        Ok(parse_response(api_response))
    }

    fn build_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| Error::Config(format!("Invalid API key: {e}")))?,
        );
        Ok(headers)
    }
}

// ============================================================================
// Public types
// ============================================================================

/// A generation request to send to Gemini.
#[derive(Debug, Clone)]
pub struct Request {
    pub model: Option<String>,
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<usize>,
}

impl Request {
    /// Create a new request with the given prompt text.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            model: None,
            prompt: prompt.into(),
            system_instruction: None,
            temperature: None,
            max_output_tokens: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_output_tokens(mut self, tokens: usize) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }
}

/// A parsed generation response.
#[derive(Debug, Clone)]
pub struct Response {
    /// Concatenated text of the first candidate's parts.
    pub text: String,
    /// Why generation stopped, as reported by the API.
    pub finish_reason: FinishReason,
    /// Token accounting, when the API reports it.
    pub usage: Option<Usage>,
}

/// Why a candidate stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other,
}

/// Token usage for a request.
#[derive(Debug, Clone, Copy)]
pub struct Usage {
    pub prompt_tokens: usize,
    pub response_tokens: usize,
}

// ============================================================================
// Internal API types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<ApiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<ApiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<ApiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiContent {
    parts: Vec<ApiPart>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
    #[serde(default)]
    usage_metadata: Option<ApiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCandidate {
    #[serde(default)]
    content: Option<ApiContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiUsageMetadata {
    #[serde(default)]
    prompt_token_count: usize,
    #[serde(default)]
    candidates_token_count: usize,
}

fn build_api_request(request: &Request) -> ApiRequest {
    let generation_config = if request.temperature.is_some() || request.max_output_tokens.is_some()
    {
        Some(ApiGenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_output_tokens,
        })
    } else {
        None
    };

    ApiRequest {
        contents: vec![ApiContent {
            parts: vec![ApiPart {
                text: request.prompt.clone(),
            }],
            role: Some("user".to_string()),
        }],
        system_instruction: request.system_instruction.as_ref().map(|text| ApiContent {
            parts: vec![ApiPart { text: text.clone() }],
            role: None,
        }),
        generation_config,
    }
}

fn parse_response(api_response: ApiResponse) -> Response {
    let first = api_response.candidates.into_iter().next();

    let (text, finish_reason) = match first {
        Some(candidate) => {
            let text = candidate
                .content
                .map(|c| {
                    c.parts
                        .into_iter()
                        .map(|p| p.text)
                        .collect::<Vec<_>>()
                        .join("")
                })
                .unwrap_or_default();
            let finish_reason = match candidate.finish_reason.as_deref() {
                Some("STOP") | None => FinishReason::Stop,
                Some("MAX_TOKENS") => FinishReason::MaxTokens,
                Some("SAFETY") => FinishReason::Safety,
                Some(_) => FinishReason::Other,
            };
            (text.trim().to_string(), finish_reason)
        }
        None => (String::new(), FinishReason::Other),
    };

    Response {
        text,
        finish_reason,
        usage: api_response.usage_metadata.map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            response_tokens: u.candidates_token_count,
        }),
    }
}
