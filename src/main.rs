// ABOUTME: Main entry point for the Orvia onboarding wizard
//
// Binary: orvia
// Usage: orvia [COMMAND]
// - No command: replay an event script from stdin
// - replay: replay an event script from a file or stdin
// - interactive: drive the wizard from the keyboard
// - careers: list career tracks

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use orvia::config::OnboardingConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let config = match &args.config {
        Some(path) => OnboardingConfig::load_from(path)?,
        None => OnboardingConfig::load()?,
    };

    setup_logging(&config)?;
    setup_panic_handler();

    match args.command {
        Some(cli::Commands::Careers) => cli::careers::execute(args.format),
        Some(cli::Commands::Interactive) => cli::interactive::execute(args.format, &config),
        Some(cli::Commands::Replay(replay_args)) => {
            cli::replay::execute(replay_args, args.format, &config).await
        }
        None => cli::replay::execute(cli::ReplayArgs::default(), args.format, &config).await,
    }
}

fn setup_logging(config: &OnboardingConfig) -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = OnboardingConfig::log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    // One JSONL file per run
    let log_file = log_dir.join(format!(
        "orvia-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before reporting
        cli::interactive::cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
