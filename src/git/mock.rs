use crate::error::Result;
use crate::git::Repository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
///
/// Records every query so tests can assert which calls happened.
#[derive(Debug, Default)]
pub struct MockRepository {
    tags: Vec<String>,
    commits_since: HashMap<String, Vec<String>>,
    list_tags_calls: AtomicUsize,
    log_requests: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Set the commit messages returned for a range starting at `tag`
    pub fn set_commits_since(&mut self, tag: impl Into<String>, messages: &[&str]) {
        self.commits_since.insert(
            tag.into(),
            messages.iter().map(|m| m.to_string()).collect(),
        );
    }

    /// Number of times `list_tags` was called
    pub fn list_tags_calls(&self) -> usize {
        self.list_tags_calls.load(Ordering::SeqCst)
    }

    /// Tags passed to `commit_messages_since`, in call order
    pub fn log_requests(&self) -> Vec<String> {
        self.log_requests.lock().unwrap().clone()
    }

    /// Total number of repository queries made
    pub fn total_calls(&self) -> usize {
        self.list_tags_calls() + self.log_requests.lock().unwrap().len()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        self.list_tags_calls.fetch_add(1, Ordering::SeqCst);
        let mut tags = self.tags.clone();
        tags.sort();
        Ok(tags)
    }

    fn commit_messages_since(&self, tag: &str) -> Result<Vec<String>> {
        self.log_requests.lock().unwrap().push(tag.to_string());
        Ok(self.commits_since.get(tag).cloned().unwrap_or_default())
    }
}
