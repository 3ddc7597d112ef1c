use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use git_release_notes::cli::orchestration::run_release_workflow;
use git_release_notes::cli::Args;
use git_release_notes::config;
use git_release_notes::git::Git2Repository;
use git_release_notes::llm::OpenAiSummarizer;
use git_release_notes::ui;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Warnings only by default; each `-v` raises the level and RUST_LOG overrides.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

async fn run(args: Args) -> Result<()> {
    let config =
        config::load_config(args.config.as_deref()).context("Failed to load configuration")?;

    let mut llm = config.llm.clone();
    if let Some(model) = &args.model {
        llm.model = model.clone();
    }
    let summarizer = OpenAiSummarizer::from_config(&llm);
    let credential = std::env::var(&llm.api_key_env).ok();

    let options = args.into_options(&config);

    ui::display_status(&format!(
        "Generating {} release notes with {}...",
        options.bump,
        summarizer.model()
    ));

    let outcome = run_release_workflow(
        &options,
        &llm.api_key_env,
        credential,
        || Git2Repository::open("."),
        &summarizer,
        chrono::Utc::now().date_naive(),
    )
    .await?;

    ui::display_commit_preview(&outcome.commits, &outcome.since_tag);
    ui::display_proposed_version(&outcome.latest_tag, &outcome.version);

    if outcome.dry_run {
        ui::display_notes(&outcome.notes);
    }

    ui::display_outcome(&outcome);
    Ok(())
}
