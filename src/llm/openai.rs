//! OpenAI-compatible chat completion client.
//!
//! Sends the instruction as the system message and the commit list, encoded
//! as a JSON array, as the user message. One request per run: no retry, no
//! client-side timeout.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ApiKey, SummaryRequest, Summarizer};
use crate::config::LlmConfig;
use crate::error::{ReleaseNotesError, Result};

/// Summarizer backed by `POST {api_base}/chat/completions`.
#[derive(Debug, Clone)]
pub struct OpenAiSummarizer {
    client: Client,
    model: String,
    api_base: String,
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, or empty when the provider sent none.
    fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default()
    }
}

impl OpenAiSummarizer {
    pub fn new(model: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
            api_base: api_base.into(),
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Build a client from the `[llm]` configuration section.
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(&config.model, &config.api_base).with_temperature(config.temperature)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, api_key: &ApiKey, request: &SummaryRequest) -> Result<String> {
        let url = self.endpoint();
        let commits = serde_json::to_string(&request.commits).map_err(|e| {
            ReleaseNotesError::summarization(format!("cannot encode commits: {}", e))
        })?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &commits,
                },
            ],
            temperature: self.temperature,
        };

        log::info!(
            "requesting summary of {} commits from {} ({})",
            request.commits.len(),
            url,
            self.model
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                ReleaseNotesError::summarization(format!("request to {} failed: {}", url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ReleaseNotesError::summarization(format!(
                "{} returned {}: {}",
                url,
                status,
                text.trim()
            )));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            ReleaseNotesError::summarization(format!("malformed response from {}: {}", url, e))
        })?;

        let text = parsed.into_text();
        log::debug!("received {} bytes of generated text", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = OpenAiSummarizer::new("gpt-4o", "http://localhost:8080/v1/");
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_from_config() {
        let config = LlmConfig {
            model: "local-model".to_string(),
            temperature: Some(0.3),
            ..LlmConfig::default()
        };
        let client = OpenAiSummarizer::from_config(&config);
        assert_eq!(client.model(), "local-model");
        assert_eq!(client.temperature, Some(0.3));
    }

    #[test]
    fn test_request_omits_unset_temperature() {
        let body = ChatRequest {
            model: "gpt-4o",
            messages: vec![ChatMessage {
                role: "system",
                content: "hi",
            }],
            temperature: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("temperature").is_none());
        assert_eq!(json["messages"][0]["role"], "system");
    }

    #[test]
    fn test_response_text_extraction() {
        let parsed: ChatResponse = serde_json::from_str(
            r###"{"choices":[{"message":{"role":"assistant","content":"## Notes"}}]}"###,
        )
        .unwrap();
        assert_eq!(parsed.into_text(), "## Notes");
    }

    #[test]
    fn test_response_without_content_is_empty() {
        let null_content: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(null_content.into_text(), "");

        let no_choices: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(no_choices.into_text(), "");
    }
}
