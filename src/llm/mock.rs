//! Mock summarizer for deterministic testing.
//!
//! Returns a canned response (or a canned failure) and records every request
//! for later verification.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{ApiKey, SummaryRequest, Summarizer};
use crate::error::{ReleaseNotesError, Result};

#[derive(Debug)]
pub struct MockSummarizer {
    response: std::result::Result<String, String>,
    requests: Mutex<Vec<SummaryRequest>>,
}

impl MockSummarizer {
    /// A summarizer that always answers with `text`.
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A summarizer that always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Recorded requests, in call order.
    pub fn requests(&self) -> Vec<SummaryRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, _api_key: &ApiKey, request: &SummaryRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.response
            .clone()
            .map_err(ReleaseNotesError::SummarizationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SummaryRequest {
        SummaryRequest {
            prompt: "summarize".to_string(),
            commits: vec!["fix: typo".to_string()],
        }
    }

    #[tokio::test]
    async fn test_returning_records_request() {
        let mock = MockSummarizer::returning("notes");
        let text = mock.summarize(&ApiKey::new("k"), &request()).await.unwrap();

        assert_eq!(text, "notes");
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.requests()[0], request());
    }

    #[tokio::test]
    async fn test_failing() {
        let mock = MockSummarizer::failing("boom");
        let err = mock.summarize(&ApiKey::new("k"), &request()).await.unwrap_err();

        assert!(matches!(err, ReleaseNotesError::SummarizationFailed(ref m) if m == "boom"));
        assert_eq!(mock.call_count(), 1);
    }
}
