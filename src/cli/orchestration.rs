//! Main workflow orchestration logic
//!
//! The release note pipeline, kept apart from argument parsing so it can be
//! driven programmatically (and with mock collaborators in tests):
//!
//! 1. Check the options and the API credential
//! 2. Open the repository
//! 3. Resolve the latest tag and the tag bounding the commit range
//! 4. Collect commit messages since the bounding tag
//! 5. Compute the next version from the latest tag
//! 6. Ask the summarizer for release notes
//! 7. Write the notes (unless this is a dry run)

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::boundary::BoundaryWarning;
use crate::domain::{next_version, select_latest, ReleaseType};
use crate::error::{ReleaseNotesError, Result};
use crate::git::Repository;
use crate::llm::{ApiKey, SummaryRequest, Summarizer};
use crate::output::{write_outputs, OutputTargets};
use crate::prompt::{build_prompt, PromptStyle};

/// Options for one run, fixed once parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOptions {
    pub targets: OutputTargets,
    pub bump: ReleaseType,
    pub preid: Option<String>,
    pub context: Option<String>,
    pub since_tag: Option<String>,
    pub style: PromptStyle,
    pub dry_run: bool,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// Latest tag, the base for version arithmetic
    pub latest_tag: String,

    /// Tag bounding the commit range
    pub since_tag: String,

    /// Computed next version, with the latest tag's prefix
    pub version: String,

    /// Commit messages sent for summarization, in log order
    pub commits: Vec<String>,

    /// Generated notes, verbatim
    pub notes: String,

    /// Files written (always empty for a dry run)
    pub written: Vec<PathBuf>,

    pub warnings: Vec<BoundaryWarning>,

    pub dry_run: bool,
}

/// The tags a run works from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRange {
    pub latest: String,
    pub since: String,
}

/// Resolve the latest tag and the tag the commit range starts at.
///
/// The latest tag always drives version arithmetic; an explicit `since_tag`
/// only moves the start of the commit range and must exist.
pub fn resolve_tags<R: Repository>(repo: &R, since_tag: Option<&str>) -> Result<TagRange> {
    let tags = repo.list_tags()?;
    let latest = select_latest(&tags)
        .cloned()
        .ok_or(ReleaseNotesError::NoTagsFound)?;

    let since = match since_tag {
        Some(requested) => {
            if !tags.iter().any(|t| t == requested) {
                return Err(ReleaseNotesError::TagNotFound(requested.to_string()));
            }
            requested.to_string()
        }
        None => latest.clone(),
    };

    log::info!("latest tag {}, collecting commits since {}", latest, since);
    Ok(TagRange { latest, since })
}

/// Main release notes workflow
///
/// # Arguments
///
/// * `options` - Parsed run options
/// * `credential_var` - Name of the environment variable the key comes from
/// * `credential` - Its value, if set
/// * `open_repo` - Opens the repository; only called once the credential is present
/// * `summarizer` - Text-generation backend
/// * `today` - Date used in the version heading
pub async fn run_release_workflow<R, F, S>(
    options: &ReleaseOptions,
    credential_var: &str,
    credential: Option<String>,
    open_repo: F,
    summarizer: &S,
    today: NaiveDate,
) -> Result<ReleaseOutcome>
where
    R: Repository,
    F: FnOnce() -> Result<R>,
    S: Summarizer + ?Sized,
{
    if options.preid.is_some() && !options.bump.is_prerelease() {
        return Err(ReleaseNotesError::config(format!(
            "a prerelease identifier only applies to pre* bumps, not {}",
            options.bump
        )));
    }

    let api_key = ApiKey::from_credential(credential_var, credential)?;
    let repo = open_repo()?;

    let range = resolve_tags(&repo, options.since_tag.as_deref())?;
    let commits = repo.commit_messages_since(&range.since)?;
    let version = next_version(&range.latest, options.bump, options.preid.as_deref())?;
    log::info!(
        "{} bump: {} -> {} ({} commits)",
        options.bump,
        range.latest,
        version,
        commits.len()
    );

    let mut warnings = Vec::new();
    if commits.is_empty() {
        warnings.push(BoundaryWarning::EmptyCommitRange {
            since_tag: range.since.clone(),
        });
    }

    let request = SummaryRequest {
        prompt: build_prompt(&version, today, options.style, options.context.as_deref()),
        commits,
    };
    let notes = summarizer.summarize(&api_key, &request).await?;
    if notes.trim().is_empty() {
        warnings.push(BoundaryWarning::EmptySummary);
    }

    let report = write_outputs(&options.targets, &notes, options.dry_run)?;
    warnings.extend(report.warnings);

    Ok(ReleaseOutcome {
        latest_tag: range.latest,
        since_tag: range.since,
        version,
        commits: request.commits,
        notes,
        written: report.written,
        warnings,
        dry_run: options.dry_run,
    })
}
