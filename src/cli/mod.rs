// ABOUTME: CLI argument parsing and command routing for orvia
//
// Provides command-line interface for:
// - Replaying an event script through the wizard (replay, default)
// - Driving the wizard from the keyboard (interactive)
// - Listing the career catalog (careers)

pub mod careers;
pub mod interactive;
pub mod replay;

use clap::{Parser, Subcommand};
use orvia::presenter::OutputFormat;
use std::path::PathBuf;

/// Orvia onboarding wizard - collect a name and a career track
#[derive(Parser)]
#[command(name = "orvia")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format for emitted instructions
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Config file (defaults to ~/.orvia/config/onboarding.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Feed an event script through the wizard (default; reads stdin)
    Replay(ReplayArgs),

    /// Drive the wizard from the keyboard
    Interactive,

    /// List available career tracks
    Careers,
}

/// Arguments for the replay command
#[derive(clap::Args, Default)]
pub struct ReplayArgs {
    /// Script file; stdin when omitted
    pub script: Option<PathBuf>,
}
