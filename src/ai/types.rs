//! Request and response types for the generative-language-model API.

use serde::{Deserialize, Serialize};

/// A user story proposed by the AI from a feature idea.
///
/// Drafts are previews: nothing is added to the board until the user
/// accepts one, at which point it becomes a [`CreateTaskInput`].
///
/// [`CreateTaskInput`]: crate::models::CreateTaskInput
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoryDraft {
    pub title: String,
    pub description: String,
    pub points: u32,
}

// ============================================================
// Wire format
// ============================================================
//
// The gateway speaks a `generateContent`-style protocol: requests carry a
// list of contents made of text and inline-data parts, responses carry
// candidates whose first part holds the generated text. Field names are
// camelCase on the wire.

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// Base64 payload embedded directly in a request part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}
