pub mod boundary;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod llm;
pub mod output;
pub mod prompt;
pub mod ui;

pub use error::{ReleaseNotesError, Result};
