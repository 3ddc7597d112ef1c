use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions noticed while generating release notes.
/// These never abort the run but should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No commits between the bounding tag and HEAD
    EmptyCommitRange { since_tag: String },
    /// The model answered without any text
    EmptySummary,
    /// Changelog had no `## [Unreleased]` line, so one was appended
    ChangelogMarkerMissing { path: PathBuf },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::EmptyCommitRange { since_tag } => {
                write!(f, "No commits since tag '{}'", since_tag)
            }
            BoundaryWarning::EmptySummary => {
                write!(f, "The summarization service returned no text")
            }
            BoundaryWarning::ChangelogMarkerMissing { path } => {
                write!(
                    f,
                    "'## [Unreleased]' not found in {}; appended it at the end",
                    path.display()
                )
            }
        }
    }
}
