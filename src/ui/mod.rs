//! User interface module - console output.
//!
//! The tool is non-interactive; everything user-facing goes through
//! `formatter`, while diagnostics go through the `log` facade.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_commit_preview, display_error, display_notes,
    display_outcome, display_proposed_version, display_status, display_success,
};
