use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::boundary::BoundaryWarning;
use crate::changelog;
use crate::error::{ReleaseNotesError, Result};

/// Where generated notes go. Either path may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputTargets {
    pub release_notes: Option<PathBuf>,
    pub changelog: Option<PathBuf>,
}

/// Files touched by [`write_outputs`] and anything worth reporting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub warnings: Vec<BoundaryWarning>,
}

/// Write the notes to the configured targets.
///
/// In dry-run mode nothing is read or written. Otherwise the release notes
/// file is overwritten first, then the changelog is updated; a failure on the
/// changelog leaves the release notes file already written.
pub fn write_outputs(targets: &OutputTargets, notes: &str, dry_run: bool) -> Result<WriteReport> {
    let mut report = WriteReport::default();

    if dry_run {
        log::debug!("dry run: skipping all file writes");
        return Ok(report);
    }

    if let Some(path) = &targets.release_notes {
        fs::write(path, notes).map_err(|e| ReleaseNotesError::file_io(path, e))?;
        log::info!("wrote release notes to {}", path.display());
        report.written.push(path.clone());
    }

    if let Some(path) = &targets.changelog {
        if !update_changelog(path, notes)? {
            report.warnings.push(BoundaryWarning::ChangelogMarkerMissing { path: path.clone() });
        }
        log::info!("updated changelog {}", path.display());
        report.written.push(path.clone());
    }

    Ok(report)
}

/// Splice `notes` into the changelog at `path`, creating it if missing.
///
/// Returns whether the `## [Unreleased]` marker was already present.
pub fn update_changelog(path: &Path, notes: &str) -> Result<bool> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(ReleaseNotesError::file_io(path, e)),
    };

    let result = changelog::splice(&existing, notes);
    fs::write(path, &result.content).map_err(|e| ReleaseNotesError::file_io(path, e))?;

    Ok(result.marker_found)
}
