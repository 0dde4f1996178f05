// ABOUTME: CLI interactive command - drive the wizard from the keyboard
//
// Puts the terminal in raw mode, maps key presses to wizard events and prints
// the emitted instructions. Drawing the screens is left to a real frontend.

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use orvia::config::OnboardingConfig;
use orvia::input::KeyInput;
use orvia::onboarding::OnboardingFlow;
use orvia::presenter::{OutputFormat, StreamPresenter};
use orvia::session::OnboardingSession;
use std::io::{self, IsTerminal};
use std::time::Duration;
use tracing::error;

/// Terminal cleanup utility to ensure proper restoration
pub fn cleanup_terminal() {
    let _ = disable_raw_mode();
}

/// Execute the interactive command
pub fn execute(format: OutputFormat, config: &OnboardingConfig) -> Result<()> {
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "No TTY detected. Interactive mode requires a terminal.\n\
             Use `orvia replay` to feed events from a script instead."
        ));
    }

    enable_raw_mode()?;
    let result = run_loop(format, config);
    if let Err(e) = disable_raw_mode() {
        error!("Failed to restore terminal: {}", e);
    }
    result
}

fn run_loop(format: OutputFormat, config: &OnboardingConfig) -> Result<()> {
    let tick_rate = Duration::from_millis(50);
    let presenter = StreamPresenter::new(io::stdout(), format).raw_mode();
    let mut session =
        OnboardingSession::new(OnboardingFlow::with_delay(config.advance_delay()), presenter);
    let mut input = KeyInput::new();

    session.start()?;

    loop {
        if event::poll(tick_rate)? {
            if let Event::Key(key_event) = event::read()? {
                let step = session.flow().current_step();
                if let Some(user_event) = input.handle_key_event(key_event, step) {
                    if !session.handle_event(user_event)? {
                        return Ok(());
                    }
                }
            }
        }
        session.tick()?;
    }
}
