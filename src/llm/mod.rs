//! Text-generation abstraction
//!
//! The workflow only needs one operation from a language model: turn an
//! instruction plus the commit list into markdown. [`Summarizer`] is that seam;
//! [`openai::OpenAiSummarizer`] talks to an OpenAI-compatible chat completion
//! endpoint and [`mock::MockSummarizer`] records requests for tests.

pub mod mock;
pub mod openai;

pub use mock::MockSummarizer;
pub use openai::OpenAiSummarizer;

use async_trait::async_trait;
use std::fmt;

use crate::error::{ReleaseNotesError, Result};

/// API credential for the text-generation service.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

// Custom Debug to avoid exposing the key
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        ApiKey(value.into())
    }

    /// Accept a credential read from `var`.
    ///
    /// An unset or blank value is a `MissingCredential` error.
    pub fn from_credential(var: &str, value: Option<String>) -> Result<Self> {
        match value {
            Some(key) if !key.trim().is_empty() => Ok(ApiKey(key)),
            _ => Err(ReleaseNotesError::MissingCredential {
                var: var.to_string(),
            }),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

/// One summarization request: the instruction and the raw commit messages.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    pub prompt: String,
    pub commits: Vec<String>,
}

/// A service that turns commit messages into release notes.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Send the request in a single call and return the generated text.
    ///
    /// A response without content yields an empty string. Any transport,
    /// status or decoding failure is `SummarizationFailed`.
    async fn summarize(&self, api_key: &ApiKey, request: &SummaryRequest) -> Result<String>;
}
