use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::time::Duration;
use tracing::debug;

use super::error::TranslateError;
use super::language::Language;
use super::prompt::build_prompt;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// One user-initiated translation. Built fresh per action and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source: Language,
    pub target: Language,
    pub text: String,
}

impl TranslationRequest {
    pub fn new(source: Language, target: Language, text: impl Into<String>) -> Self {
        Self {
            source,
            target,
            text: text.into(),
        }
    }

    /// The instruction prompt for this request.
    pub fn prompt(&self) -> String {
        build_prompt(self.source, self.target, &self.text)
    }
}

/// Anything that can turn a [`TranslationRequest`] into translated text.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError>;
}

/// An API credential. Its `Debug` output never shows the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<ApiKey>,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: Cow<'a, str>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str, temperature: f32) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Cow::Borrowed(prompt),
                }],
            }],
            generation_config: GenerationConfig { temperature },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
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
    #[serde(default)]
    thought: bool,
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    url: String,
    model: String,
    api_key: Option<ApiKey>,
    temperature: f32,
}

impl GeminiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: generate_content_url(&config.endpoint, &config.model),
            model: config.model,
            api_key: config.api_key,
            temperature: config.temperature,
        })
    }

    async fn send(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let Some(api_key) = &self.api_key else {
            return Err(TranslateError::Auth("no API key configured".to_string()));
        };

        let prompt = request.prompt();
        let body = GenerateContentRequest::new(&prompt, self.temperature);

        debug!(
            model = %self.model,
            url = %self.url,
            source = %request.source,
            target = %request.target,
            "sending translation request"
        );

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", api_key.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        let raw = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&raw)
            .map_err(|e| TranslateError::Transport(format!("invalid response body: {e}")))?;

        extract_text(parsed)
    }
}

#[async_trait]
impl Translator for GeminiClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let result = self.send(request).await;
        if let Err(e) = &result {
            debug!(kind = e.kind(), error = %e, model = %self.model, "translation failed");
        }
        result
    }
}

fn generate_content_url(endpoint: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        endpoint.trim_end_matches('/'),
        model.trim()
    )
}

// Gemini answers a malformed key with 400 INVALID_ARGUMENT rather than 401.
fn classify_status(status: StatusCode, body: &str) -> TranslateError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            TranslateError::Auth(format!("API rejected the credential ({status}): {body}"))
        }
        StatusCode::BAD_REQUEST if body.contains("API_KEY_INVALID") => {
            TranslateError::Auth(format!("API rejected the credential ({status}): {body}"))
        }
        _ => TranslateError::Transport(format!("API request failed with status {status}: {body}")),
    }
}

/// Takes the first candidate's text, trimmed. Thought parts are skipped.
fn extract_text(response: GenerateContentResponse) -> Result<String, TranslateError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|part| !part.thought)
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(TranslateError::EmptyResponse)
    } else {
        Ok(trimmed.to_string())
    }
}
