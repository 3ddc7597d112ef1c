//! Pure formatting functions for UI output.
//!
//! Line builders return `String`s so they can be tested; the `display_*`
//! functions print them.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::orchestration::ReleaseOutcome;

/// Maximum number of commits listed in the preview.
const PREVIEW_LIMIT: usize = 10;

/// Maximum characters shown per commit subject.
const SUBJECT_WIDTH: usize = 60;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// First line of a commit message, cut to the preview width.
pub fn commit_subject(message: &str) -> String {
    let first_line = message.lines().next().unwrap_or("");
    if first_line.chars().count() > SUBJECT_WIDTH {
        let cut: String = first_line.chars().take(SUBJECT_WIDTH).collect();
        format!("{}…", cut)
    } else {
        first_line.to_string()
    }
}

/// Preview lines for the commits included in the release.
pub fn commit_preview_lines(commits: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = commits
        .iter()
        .take(PREVIEW_LIMIT)
        .enumerate()
        .map(|(i, message)| format!("  {}. {}", i + 1, commit_subject(message)))
        .collect();

    if commits.len() > PREVIEW_LIMIT {
        lines.push(format!(
            "  ... and {} more commits",
            commits.len() - PREVIEW_LIMIT
        ));
    }
    lines
}

/// Display the commits collected since a tag.
pub fn display_commit_preview(commits: &[String], since_tag: &str) {
    println!(
        "\n{}",
        style(format!("Commits since '{}': {}", since_tag, commits.len())).bold()
    );
    for line in commit_preview_lines(commits) {
        println!("{}", line);
    }
}

/// Display the version change.
pub fn display_proposed_version(latest_tag: &str, version: &str) {
    println!("\n{}", style("Version:").bold());
    println!("  From: {}", style(latest_tag).red());
    println!("  To:   {}", style(version).green());
}

/// Display generated notes (dry run).
pub fn display_notes(notes: &str) {
    println!("\n{}", style("Generated release notes (dry run):").bold());
    println!("{}", notes);
}

/// Confirmation lines printed after a successful run.
pub fn outcome_lines(outcome: &ReleaseOutcome) -> Vec<String> {
    let mut lines = vec![format!(
        "Release {} prepared from {} commits since {}",
        outcome.version,
        outcome.commits.len(),
        outcome.since_tag
    )];

    if outcome.dry_run {
        lines.push("Dry run: no files were written".to_string());
    } else if outcome.written.is_empty() {
        lines.push("No output files configured; nothing written".to_string());
    } else {
        for path in &outcome.written {
            lines.push(format!("Wrote {}", path.display()));
        }
    }
    lines
}

/// Display the final summary of a run.
pub fn display_outcome(outcome: &ReleaseOutcome) {
    for warning in &outcome.warnings {
        display_boundary_warning(warning);
    }
    for line in outcome_lines(outcome) {
        display_success(&line);
    }
}
