// SPDX-License-Identifier: Apache-2.0

//! OpenAI client for extracting issue proposals from free-form text.
//!
//! Sends one chat completion request with a fixed extraction instruction and
//! `json_object` response format, and parses the structured result. No retry
//! logic - a failure is reported to the caller.

pub mod types;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::error::CliError;
use types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ExtractionResponse, IssueProposal,
    ResponseFormat,
};

/// OpenAI chat completions endpoint.
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model used for issue extraction.
pub const EXTRACTION_MODEL: &str = "gpt-4o";

/// Request timeout for the completion call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAI API client for issue extraction.
///
/// Holds the HTTP client and API key for the single request a run makes.
pub struct OpenAiClient {
    /// HTTP client with configured timeout.
    http: Client,
    /// API key for bearer authentication.
    api_key: SecretString,
}

impl OpenAiClient {
    /// Creates a new client with the given API key.
    pub fn new(api_key: SecretString) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { http, api_key })
    }

    /// Extracts issue proposals from free-form text.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Ai`] on a non-success HTTP status,
    /// [`CliError::Network`] on transport failure, and
    /// [`CliError::InvalidAiResponse`] when the content is not the
    /// expected JSON shape.
    #[instrument(skip_all, fields(text_len = text.len()))]
    pub async fn extract_issues(&self, text: &str) -> Result<Vec<IssueProposal>> {
        let request = build_extraction_request(text);
        debug!(model = %request.model, "Calling OpenAI API");

        let response = self
            .http
            .post(OPENAI_API_URL)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&request)
            .send()
            .await
            .map_err(CliError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(CliError::Ai {
                message: if error_body.is_empty() {
                    "request failed".to_string()
                } else {
                    error_body
                },
                status: Some(status.as_u16()),
            }
            .into());
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI API response")?;

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| CliError::Ai {
                message: "response contained no choices".to_string(),
                status: None,
            })?;

        let proposals = parse_extraction(content)?;
        debug!(count = proposals.len(), "Extracted issue proposals");
        Ok(proposals)
    }
}

/// Builds the chat completion request for issue extraction.
fn build_extraction_request(text: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: EXTRACTION_MODEL.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: build_system_prompt(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: format!("Convert the following text to Linear issues: {text}"),
            },
        ],
        response_format: Some(ResponseFormat {
            format_type: "json_object".to_string(),
        }),
    }
}

/// Builds the system prompt fixing the output schema.
fn build_system_prompt() -> String {
    "You extract actionable issues from free-form text. \
     Respond with a JSON object of the shape \
     {\"issues\": [{\"title\": string, \"description\": string}]}. \
     Each issue gets a short imperative title and a description expanding on it. \
     Return only the JSON object."
        .to_string()
}

/// Parses the message content into issue proposals.
fn parse_extraction(content: &str) -> Result<Vec<IssueProposal>> {
    let extraction: ExtractionResponse =
        serde_json::from_str(content).map_err(CliError::InvalidAiResponse)?;
    Ok(extraction.issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_extraction_request_embeds_text() {
        let request = build_extraction_request("Fix login bug and add dark mode");

        assert_eq!(request.model, EXTRACTION_MODEL);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].role, "user");
        assert!(
            request.messages[1]
                .content
                .contains("Fix login bug and add dark mode")
        );
        assert_eq!(
            request.response_format.as_ref().map(|f| f.format_type.as_str()),
            Some("json_object")
        );
    }

    #[test]
    fn test_system_prompt_fixes_schema() {
        let prompt = build_system_prompt();
        assert!(prompt.contains("\"issues\""));
        assert!(prompt.contains("\"title\""));
        assert!(prompt.contains("\"description\""));
    }

    #[test]
    fn test_parse_extraction_valid() {
        let content = r#"{"issues": [{"title": "t", "description": "d"}]}"#;
        let proposals = parse_extraction(content).expect("parse");

        assert_eq!(proposals.len(), 1);
        assert_eq!(proposals[0].title, "t");
    }

    #[test]
    fn test_parse_extraction_empty_list() {
        let proposals = parse_extraction(r#"{"issues": []}"#).expect("parse");
        assert!(proposals.is_empty());
    }

    #[test]
    fn test_parse_extraction_invalid_shape() {
        let result = parse_extraction(r#"{"items": []}"#);
        let err = result.expect_err("should fail");
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidAiResponse(_))
        ));
    }

    #[test]
    fn test_parse_extraction_not_json() {
        assert!(parse_extraction("sure, here are the issues:").is_err());
    }
}
