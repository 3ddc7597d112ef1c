use crate::error::{ReleaseNotesError, Result};
use git2::{Repository as Git2Repo, Sort};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        log::debug!("opened repository at {}", repo.path().display());

        Ok(Git2Repository { repo })
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;

        let mut tags: Vec<String> = names.iter().flatten().map(String::from).collect();
        tags.sort();

        log::debug!("found {} tags", tags.len());
        Ok(tags)
    }

    fn commit_messages_since(&self, tag: &str) -> Result<Vec<String>> {
        let reference_name = format!("refs/tags/{}", tag);

        // Annotated tags peel through the tag object to the commit
        let tag_commit = self
            .repo
            .find_reference(&reference_name)
            .and_then(|reference| reference.peel_to_commit())
            .map_err(|e| match e.code() {
                git2::ErrorCode::NotFound => ReleaseNotesError::TagNotFound(tag.to_string()),
                _ => ReleaseNotesError::Git(e),
            })?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_head()?;
        revwalk.hide(tag_commit.id())?;

        let mut messages = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            messages.push(String::from_utf8_lossy(commit.message_bytes()).into_owned());
        }

        log::debug!("collected {} commits since {}", messages.len(), tag);
        Ok(messages)
    }
}
