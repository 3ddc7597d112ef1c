//! Command-line surface
//!
//! `Args` is the clap definition; [`Args::into_options`] merges it with the
//! configuration file into the immutable [`orchestration::ReleaseOptions`].

pub mod orchestration;

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::ReleaseType;
use crate::output::OutputTargets;
use crate::prompt::PromptStyle;
use orchestration::ReleaseOptions;

#[derive(clap::Parser, Debug)]
#[command(
    name = "git-release-notes",
    version,
    about = "Generate release notes and changelog entries from git history with a language model"
)]
pub struct Args {
    #[arg(long, value_name = "PATH", help = "Changelog file to update under '## [Unreleased]'")]
    pub changelog: Option<PathBuf>,

    #[arg(long, value_name = "PATH", help = "File to overwrite with the generated release notes")]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, help = "Which version component to increment")]
    pub bump: ReleaseType,

    #[arg(long, help = "Prerelease identifier for pre* bumps (e.g. beta, rc)")]
    pub preid: Option<String>,

    #[arg(long, help = "Extra context appended to the model instructions")]
    pub context: Option<String>,

    #[arg(long, value_name = "TAG", help = "Collect commits since this tag instead of the latest")]
    pub since_tag: Option<String>,

    #[arg(long, help = "Start the notes with a short summary paragraph")]
    pub summary: bool,

    #[arg(long, help = "Use a light, playful tone")]
    pub fun: bool,

    #[arg(long, help = "Use emoji in the notes (never in headings)")]
    pub emoji: bool,

    #[arg(long, help = "Print the notes instead of writing files")]
    pub dry_run: bool,

    #[arg(long, value_name = "PATH", help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Model name, overriding the configuration file")]
    pub model: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,
}

impl Args {
    /// Resolve flags against configuration defaults.
    pub fn into_options(self, config: &Config) -> ReleaseOptions {
        ReleaseOptions {
            targets: OutputTargets {
                release_notes: self.output.or_else(|| config.output.release_notes.clone()),
                changelog: self.changelog.or_else(|| config.output.changelog.clone()),
            },
            bump: self.bump,
            preid: self.preid,
            context: self.context,
            since_tag: self.since_tag,
            style: PromptStyle {
                summary: self.summary,
                fun: self.fun,
                emoji: self.emoji,
            },
            dry_run: self.dry_run,
        }
    }
}
