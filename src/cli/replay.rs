// ABOUTME: CLI replay command - run an event script through the wizard
//
// Reads `name`/`continue`/`select`/`back`/`roadmap`/`wait` lines from a file or
// stdin and prints every instruction the wizard emits.

use super::ReplayArgs;
use anyhow::{Context, Result};
use orvia::config::OnboardingConfig;
use orvia::onboarding::OnboardingFlow;
use orvia::presenter::{OutputFormat, StreamPresenter};
use orvia::script::{parse_script, ScriptStep};
use orvia::session::{OnboardingSession, UserEvent};
use std::io::{self, Read};
use tokio::sync::mpsc;
use tracing::info;

/// Execute the replay command
pub async fn execute(args: ReplayArgs, format: OutputFormat, config: &OnboardingConfig) -> Result<()> {
    let source = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };

    let steps = parse_script(&source)?;
    info!(steps = steps.len(), "Replaying onboarding script");

    let (tx, rx) = mpsc::channel::<UserEvent>(32);
    let feeder = tokio::spawn(async move {
        for step in steps {
            match step {
                ScriptStep::Event(event) => {
                    if tx.send(event).await.is_err() {
                        break;
                    }
                }
                ScriptStep::Wait(duration) => tokio::time::sleep(duration).await,
            }
        }
    });

    let presenter = StreamPresenter::new(io::stdout(), format);
    let mut session =
        OnboardingSession::new(OnboardingFlow::with_delay(config.advance_delay()), presenter);
    session.run(rx).await?;

    feeder.abort();
    Ok(())
}
