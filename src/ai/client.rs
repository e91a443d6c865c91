//! HTTP client for the AI gateway.
//!
//! The gateway is a hosted generative-language-model API; this client only
//! shapes requests and parses responses, it holds no AI logic of its own.
//! Configuration is via environment variables:
//! - `SCRUMBOARD_AI_URL` - Base URL (default: hosted service)
//! - `SCRUMBOARD_AI_KEY` - API key (required; no key means no AI features)
//! - `SCRUMBOARD_AI_MODEL` - Model name (default: `gemini-2.0-flash`)

use reqwest::Client;
use thiserror::Error;

use crate::ai::types::*;
use crate::models::Attachment;

/// Default URL of the hosted service.
const DEFAULT_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used when none is configured.
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// AI gateway errors.
///
/// Requests are single-shot: no retry, no cancellation. A failure leaves
/// board state untouched and the caller may simply re-issue the action.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("AI request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI service error: {0}")]
    Server(String),

    #[error("unexpected AI response: {0}")]
    InvalidResponse(String),

    #[error("attachment '{0}' has no base64 payload")]
    MalformedAttachment(String),
}

/// HTTP client for the AI gateway.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GatewayClient {
    /// Create a client from environment variables.
    ///
    /// Returns `None` when no API key is configured; callers treat that as
    /// "AI features unavailable" rather than an error.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("SCRUMBOARD_AI_KEY").ok()?;
        let base_url =
            std::env::var("SCRUMBOARD_AI_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        let model =
            std::env::var("SCRUMBOARD_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Some(Self::new(base_url, api_key, model))
    }

    /// Create with explicit configuration.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client: Client::new(),
        }
    }

    /// Send one request and extract the generated text.
    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, GatewayError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Server(format!("{}: {}", status, body)));
        }

        let response: GenerateContentResponse = response.json().await?;
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| GatewayError::InvalidResponse("no text in response".to_string()))
    }

    /// Generate user-story drafts from a free-text feature idea.
    pub async fn generate_user_stories(
        &self,
        feature_idea: &str,
    ) -> Result<Vec<StoryDraft>, GatewayError> {
        let prompt = format!(
            "You are an agile coach. Break the following feature idea into \
             user stories. Respond with ONLY a JSON array where each element \
             has the keys \"title\", \"description\" and \"points\" (a story \
             point estimate from 1, 2, 3, 5 or 8).\n\nFeature idea: {}",
            feature_idea
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
        };

        let text = self.generate(&request).await?;
        parse_stories(&text)
    }

    /// Summarize retrospective notes into free text.
    pub async fn summarize_retrospective(
        &self,
        went_well: &[String],
        could_improve: &[String],
    ) -> Result<String, GatewayError> {
        let prompt = format!(
            "Summarize this sprint retrospective in a few short paragraphs, \
             ending with concrete action items.\n\nWhat went well:\n{}\n\n\
             What could improve:\n{}",
            bullet_list(went_well),
            bullet_list(could_improve)
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
        };

        self.generate(&request).await
    }

    /// Ask the model to analyze a task's attachments.
    ///
    /// Each attachment travels as an inline-data part with its data-URI
    /// prefix stripped; a payload without the `base64,` delimiter is
    /// rejected before anything is sent.
    pub async fn analyze_task_attachments(
        &self,
        task_title: &str,
        attachments: &[Attachment],
    ) -> Result<String, GatewayError> {
        let mut parts = vec![Part::text(format!(
            "Analyze the attached files for the task \"{}\". Describe what \
             they contain and anything relevant to implementing the task.",
            task_title
        ))];
        for attachment in attachments {
            let payload = strip_data_uri(attachment)?;
            parts.push(Part::inline(attachment.mime_type.clone(), payload));
        }

        let request = GenerateContentRequest {
            contents: vec![Content { parts }],
        };
        self.generate(&request).await
    }
}

/// Extract the raw base64 payload from an attachment's data URI.
///
/// The stored form is `data:<mime>;base64,<payload>`; only the payload is
/// transmitted to the gateway.
pub fn strip_data_uri(attachment: &Attachment) -> Result<&str, GatewayError> {
    attachment
        .data
        .split_once("base64,")
        .map(|(_, payload)| payload)
        .ok_or_else(|| GatewayError::MalformedAttachment(attachment.name.clone()))
}

/// Parse the model's story response into drafts.
///
/// Models often wrap JSON in markdown code fences; those are stripped
/// before parsing. Anything that does not parse as an array of drafts is
/// an invalid response.
pub fn parse_stories(text: &str) -> Result<Vec<StoryDraft>, GatewayError> {
    let trimmed = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    serde_json::from_str(trimmed)
        .map_err(|e| GatewayError::InvalidResponse(format!("not a story array: {}", e)))
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
