//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the two git queries
//! release note generation needs, allowing the real repository to be swapped
//! for an in-memory one in tests.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust
//! # use git_release_notes::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_release_notes::Result<()> {
//! let tags = repo.list_tags()?;
//! if let Some(tag) = tags.first() {
//!     let messages = repo.commit_messages_since(tag)?;
//!     println!("{} commits since {}", messages.len(), tag);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Common git query trait
///
/// `git2::Repository` is not `Sync`, so no thread-safety bounds are required;
/// the workflow runs on a single task.
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, sorted alphabetically (possibly empty)
    /// * `Err` - If there's a Git error
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Get the messages of commits reachable from HEAD but not from `tag`
    ///
    /// Messages are returned in log order (newest first), without filtering or
    /// deduplication. An empty range yields an empty vector.
    ///
    /// # Arguments
    /// * `tag` - Name of the tag bounding the range (exclusive)
    fn commit_messages_since(&self, tag: &str) -> Result<Vec<String>>;
}

impl<T: Repository + ?Sized> Repository for &T {
    fn list_tags(&self) -> Result<Vec<String>> {
        (**self).list_tags()
    }

    fn commit_messages_since(&self, tag: &str) -> Result<Vec<String>> {
        (**self).commit_messages_since(tag)
    }
}
