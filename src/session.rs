// ABOUTME: Async driver that feeds user events into the onboarding flow
// Runs the deferred summary transition on a tokio timer and forwards instructions to a presenter

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

use crate::onboarding::{Instruction, OnboardingFlow};
use crate::presenter::Presenter;

/// Discrete user actions delivered by the input layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    /// Full current contents of the name input
    NameChanged(String),
    /// Continue button or Enter on the name step
    Continue,
    /// A career option was activated; carries its raw key
    SelectCareer(String),
    Back,
    ViewRoadmap,
    Quit,
}

/// One running wizard: the flow plus the presenter it instructs
pub struct OnboardingSession<P: Presenter> {
    flow: OnboardingFlow,
    presenter: P,
}

impl<P: Presenter> OnboardingSession<P> {
    pub const fn new(flow: OnboardingFlow, presenter: P) -> Self {
        Self { flow, presenter }
    }

    pub const fn flow(&self) -> &OnboardingFlow {
        &self.flow
    }

    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_parts(self) -> (OnboardingFlow, P) {
        (self.flow, self.presenter)
    }

    /// Emit the initial render
    pub fn start(&mut self) -> Result<()> {
        let out = self.flow.start();
        self.emit(&out)
    }

    /// Apply one event. Returns `false` when the session should stop.
    pub fn handle_event(&mut self, event: UserEvent) -> Result<bool> {
        debug!(?event, step = ?self.flow.current_step(), "Handling user event");

        let out = match event {
            UserEvent::NameChanged(raw) => self.flow.set_name(&raw),
            UserEvent::Continue => self.flow.confirm_name(),
            UserEvent::SelectCareer(key) => match self.flow.select_career(&key, Instant::now()) {
                Ok(out) => out,
                Err(e) => {
                    warn!("Career selection rejected: {}", e);
                    Vec::new()
                }
            },
            UserEvent::Back => self.flow.go_back(),
            UserEvent::ViewRoadmap => self.flow.request_roadmap(),
            UserEvent::Quit => {
                info!("Quit requested");
                return Ok(false);
            }
        };

        self.emit(&out)?;
        Ok(true)
    }

    /// Fire the deferred transition if it is due
    pub fn tick(&mut self) -> Result<()> {
        let out = self.flow.poll_deferred(Instant::now());
        self.emit(&out)
    }

    /// Run until `Quit` arrives or the event channel closes.
    ///
    /// A transition still pending when the channel closes is allowed to fire
    /// before returning.
    pub async fn run(&mut self, mut events: mpsc::Receiver<UserEvent>) -> Result<()> {
        self.start()?;

        loop {
            let deadline = self.flow.next_deadline();

            tokio::select! {
                maybe_event = events.recv() => {
                    let Some(event) = maybe_event else {
                        debug!("Event channel closed");
                        break;
                    };
                    if !self.handle_event(event)? {
                        return Ok(());
                    }
                }
                () = wait_for(deadline) => {
                    self.tick()?;
                }
            }
        }

        if let Some(deadline) = self.flow.next_deadline() {
            sleep_until(deadline).await;
            self.tick()?;
        }

        info!(step = ?self.flow.current_step(), "Onboarding session finished");
        Ok(())
    }

    fn emit(&mut self, instructions: &[Instruction]) -> Result<()> {
        self.presenter.present_all(instructions)
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
