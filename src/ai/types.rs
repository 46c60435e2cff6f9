// SPDX-License-Identifier: Apache-2.0

//! Request/response types for the OpenAI chat completions API.

use serde::{Deserialize, Serialize};

/// A chat message for the completions API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant".
    pub role: String,
    /// Message content.
    pub content: String,
}

/// Request body for the chat completions API.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier (e.g., "gpt-4o").
    pub model: String,
    /// List of messages in the conversation.
    pub messages: Vec<ChatMessage>,
    /// Response format specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// Response format specification for structured output.
#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    /// Type of response format ("`json_object`" for structured output).
    #[serde(rename = "type")]
    pub format_type: String,
}

/// Response from the chat completions API.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    /// List of choices (usually just one).
    pub choices: Vec<Choice>,
}

/// A single choice in the chat completion response.
#[derive(Debug, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ChatMessage,
}

/// An issue proposal extracted from the input text.
///
/// Ephemeral - produced by the model call and discarded after the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueProposal {
    /// Issue title.
    pub title: String,
    /// Issue description (markdown).
    pub description: String,
}

/// Structured extraction response from the model.
///
/// This is the expected JSON shape of the message content.
#[derive(Debug, Deserialize)]
pub struct ExtractionResponse {
    /// Extracted issue proposals.
    pub issues: Vec<IssueProposal>,
}
