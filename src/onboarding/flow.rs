// ABOUTME: Step state machine driving the onboarding wizard
// Applies user actions to the wizard state and returns render instructions

use tokio::time::{Duration, Instant};
use tracing::{debug, info};

use super::catalog::CareerKey;
use super::error::Result;
use super::state::{FieldId, Instruction, RoadmapRequest, WizardState, WizardStep};

/// Pause between picking a career and showing the summary, long enough for
/// the selection highlight to render
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(300);

/// Career -> summary transition waiting for its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub career: CareerKey,
    pub deadline: Instant,
}

/// The onboarding wizard: owns the wizard state and at most one deferred transition.
///
/// Every operation returns the instructions the presentation layer should apply,
/// in order. An empty list means the call was ignored, which is how actions from
/// the wrong step (disabled controls) are handled.
#[derive(Debug)]
pub struct OnboardingFlow {
    state: WizardState,
    advance_delay: Duration,
    pending: Option<PendingTransition>,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_ADVANCE_DELAY)
    }

    pub fn with_delay(advance_delay: Duration) -> Self {
        Self {
            state: WizardState::new(),
            advance_delay,
            pending: None,
        }
    }

    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    pub const fn current_step(&self) -> WizardStep {
        self.state.current_step
    }

    pub const fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    /// Instructions for the initial render
    pub fn start(&self) -> Vec<Instruction> {
        info!("Orvia onboarding initialized");
        let step = self.state.current_step;
        let mut out = vec![
            Instruction::SetStepVisible { step },
            Instruction::SetProgress {
                ratio: self.progress_ratio(),
            },
        ];
        if step == WizardStep::Name {
            out.push(Instruction::SetContinueEnabled {
                enabled: !self.state.name.is_empty(),
            });
            out.push(Instruction::FocusField {
                field: FieldId::NameInput,
            });
        }
        out
    }

    /// Store the trimmed name and toggle the continue control
    pub fn set_name(&mut self, raw: &str) -> Vec<Instruction> {
        if self.state.current_step != WizardStep::Name {
            debug!("Ignoring name input outside the name step");
            return Vec::new();
        }

        self.state.name = raw.trim().to_string();
        vec![Instruction::SetContinueEnabled {
            enabled: !self.state.name.is_empty(),
        }]
    }

    /// Move from the name step to the career step
    pub fn confirm_name(&mut self) -> Vec<Instruction> {
        if self.state.current_step != WizardStep::Name || self.state.name.is_empty() {
            debug!(step = ?self.state.current_step, "Ignoring confirm_name");
            return Vec::new();
        }

        let mut out = vec![Instruction::SetDisplayText {
            field: FieldId::DisplayName,
            text: self.state.name.clone(),
        }];
        out.extend(self.enter_step(WizardStep::Career));
        out
    }

    /// Record a career choice and schedule the summary transition.
    ///
    /// The key is validated before anything else, so an unknown key fails even
    /// from the wrong step. Selecting again while a transition is pending
    /// replaces it and restarts the delay.
    pub fn select_career(&mut self, key: &str, now: Instant) -> Result<Vec<Instruction>> {
        let career: CareerKey = key.parse()?;

        if self.state.current_step != WizardStep::Career {
            debug!(step = ?self.state.current_step, %career, "Ignoring select_career");
            return Ok(Vec::new());
        }

        if let Some(previous) = self.pending.take() {
            debug!(previous = %previous.career, %career, "Restarting pending transition");
        }

        self.state.career = Some(career);
        self.pending = Some(PendingTransition {
            career,
            deadline: now + self.advance_delay,
        });

        Ok(vec![Instruction::SetSelected { career }])
    }

    pub const fn pending(&self) -> Option<&PendingTransition> {
        self.pending.as_ref()
    }

    /// When the pending transition is due, if there is one
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Fire the pending transition if its deadline has passed
    pub fn poll_deferred(&mut self, now: Instant) -> Vec<Instruction> {
        let Some(pending) = self.pending else {
            return Vec::new();
        };
        if now < pending.deadline {
            return Vec::new();
        }
        self.pending = None;

        if self.state.current_step != WizardStep::Career {
            debug!(step = ?self.state.current_step, "Dropping stale deferred transition");
            return Vec::new();
        }

        let label = pending.career.label();
        let mut out = vec![
            Instruction::SetDisplayText {
                field: FieldId::SelectedCareer,
                text: label.to_string(),
            },
            Instruction::SetDisplayText {
                field: FieldId::SummaryName,
                text: self.state.name.clone(),
            },
            Instruction::SetDisplayText {
                field: FieldId::SummaryCareer,
                text: label.to_string(),
            },
        ];
        out.extend(self.enter_step(WizardStep::Summary));
        out
    }

    /// Drop the pending transition. Returns whether one was pending.
    pub fn cancel_deferred(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Return from the career step to the name step, keeping the name
    pub fn go_back(&mut self) -> Vec<Instruction> {
        let Some(previous) = self.state.current_step.previous() else {
            debug!(step = ?self.state.current_step, "Ignoring go_back");
            return Vec::new();
        };

        if self.cancel_deferred() {
            debug!("Cancelled pending summary transition");
        }

        let mut out = self.enter_step(previous);
        out.push(Instruction::FocusField {
            field: FieldId::NameInput,
        });
        out
    }

    /// Name and resolved career label, available once the summary is showing
    pub fn roadmap_request(&self) -> Option<RoadmapRequest> {
        if self.state.current_step != WizardStep::Summary {
            return None;
        }
        self.state.career.map(|career| RoadmapRequest {
            name: self.state.name.clone(),
            career_label: career.label().to_string(),
        })
    }

    /// Hand the collected data off to the roadmap collaborator
    pub fn request_roadmap(&self) -> Vec<Instruction> {
        match self.roadmap_request() {
            Some(request) => {
                info!(name = %request.name, career = %request.career_label, "Roadmap requested");
                vec![Instruction::Notify { request }]
            }
            None => {
                debug!(step = ?self.state.current_step, "Ignoring request_roadmap");
                Vec::new()
            }
        }
    }

    /// 0 on the name step, 0.5 on the career step, 1 on the summary
    pub fn progress_ratio(&self) -> f64 {
        self.state.current_step.progress()
    }

    fn enter_step(&mut self, step: WizardStep) -> Vec<Instruction> {
        info!(from = ?self.state.current_step, to = ?step, "Wizard step change");
        self.state.current_step = step;
        vec![
            Instruction::SetStepVisible { step },
            Instruction::SetProgress {
                ratio: self.progress_ratio(),
            },
        ]
    }
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::OnboardingError;
    use pretty_assertions::assert_eq;

    fn flow_at_career(name: &str) -> OnboardingFlow {
        let mut flow = OnboardingFlow::new();
        flow.set_name(name);
        flow.confirm_name();
        assert_eq!(flow.current_step(), WizardStep::Career);
        flow
    }

    #[test]
    fn test_start_instructions() {
        let flow = OnboardingFlow::new();
        assert_eq!(
            flow.start(),
            vec![
                Instruction::SetStepVisible {
                    step: WizardStep::Name
                },
                Instruction::SetProgress { ratio: 0.0 },
                Instruction::SetContinueEnabled { enabled: false },
                Instruction::FocusField {
                    field: FieldId::NameInput
                },
            ]
        );
    }

    #[test]
    fn test_set_name_trims_and_toggles_continue() {
        let mut flow = OnboardingFlow::new();

        assert_eq!(
            flow.set_name("  Grace  "),
            vec![Instruction::SetContinueEnabled { enabled: true }]
        );
        assert_eq!(flow.state().name(), "Grace");

        assert_eq!(
            flow.set_name("   "),
            vec![Instruction::SetContinueEnabled { enabled: false }]
        );
        assert_eq!(flow.state().name(), "");
        assert_eq!(flow.current_step(), WizardStep::Name);
    }

    #[test]
    fn test_confirm_name_moves_to_career() {
        let mut flow = OnboardingFlow::new();
        flow.set_name("Linus");

        assert_eq!(
            flow.confirm_name(),
            vec![
                Instruction::SetDisplayText {
                    field: FieldId::DisplayName,
                    text: "Linus".to_string()
                },
                Instruction::SetStepVisible {
                    step: WizardStep::Career
                },
                Instruction::SetProgress { ratio: 0.5 },
            ]
        );
    }

    #[test]
    fn test_confirm_name_without_name_is_noop() {
        let mut flow = OnboardingFlow::new();
        assert!(flow.confirm_name().is_empty());

        flow.set_name(" \t ");
        assert!(flow.confirm_name().is_empty());
        assert_eq!(flow.current_step(), WizardStep::Name);
    }

    #[test]
    fn test_repeated_confirm_is_noop() {
        let mut flow = flow_at_career("Ada");
        let before = flow.state().clone();

        assert!(flow.confirm_name().is_empty());
        assert_eq!(flow.state(), &before);
    }

    #[test]
    fn test_set_name_ignored_past_name_step() {
        let mut flow = flow_at_career("Ada");
        assert!(flow.set_name("").is_empty());
        assert_eq!(flow.state().name(), "Ada");
    }

    #[test]
    fn test_select_career_defers_summary() {
        let mut flow = flow_at_career("Ada");
        let now = Instant::now();

        let out = flow.select_career("data", now).unwrap();
        assert_eq!(
            out,
            vec![Instruction::SetSelected {
                career: CareerKey::Data
            }]
        );
        assert_eq!(flow.state().career(), Some(CareerKey::Data));
        assert_eq!(flow.current_step(), WizardStep::Career);
        assert_eq!(flow.next_deadline(), Some(now + DEFAULT_ADVANCE_DELAY));

        // Not yet due
        assert!(flow.poll_deferred(now + Duration::from_millis(299)).is_empty());
        assert_eq!(flow.current_step(), WizardStep::Career);

        let out = flow.poll_deferred(now + DEFAULT_ADVANCE_DELAY);
        assert_eq!(
            out,
            vec![
                Instruction::SetDisplayText {
                    field: FieldId::SelectedCareer,
                    text: "Data Science / ML".to_string()
                },
                Instruction::SetDisplayText {
                    field: FieldId::SummaryName,
                    text: "Ada".to_string()
                },
                Instruction::SetDisplayText {
                    field: FieldId::SummaryCareer,
                    text: "Data Science / ML".to_string()
                },
                Instruction::SetStepVisible {
                    step: WizardStep::Summary
                },
                Instruction::SetProgress { ratio: 1.0 },
            ]
        );
        assert_eq!(flow.current_step(), WizardStep::Summary);
        assert!(flow.pending().is_none());
    }

    #[test]
    fn test_every_catalog_key_reaches_summary() {
        for key in CareerKey::all() {
            let mut flow = flow_at_career("Ada");
            let now = Instant::now();
            flow.select_career(key.as_str(), now).unwrap();
            let out = flow.poll_deferred(now + flow.advance_delay());

            assert_eq!(flow.current_step(), WizardStep::Summary);
            assert!(out.contains(&Instruction::SetDisplayText {
                field: FieldId::SummaryCareer,
                text: key.label().to_string(),
            }));
        }
    }

    #[test]
    fn test_invalid_career_key_does_not_mutate() {
        let mut flow = flow_at_career("Ada");
        let before = flow.state().clone();

        let err = flow.select_career("astronaut", Instant::now()).unwrap_err();
        assert_eq!(err, OnboardingError::InvalidCareerKey("astronaut".to_string()));
        assert_eq!(flow.state(), &before);
        assert!(flow.pending().is_none());
    }

    #[test]
    fn test_invalid_key_fails_from_any_step() {
        let mut flow = OnboardingFlow::new();
        assert!(flow.select_career("", Instant::now()).is_err());
    }

    #[test]
    fn test_select_career_from_wrong_step_is_noop() {
        let mut flow = OnboardingFlow::new();
        assert!(flow.select_career("web", Instant::now()).unwrap().is_empty());
        assert!(flow.state().career().is_none());
        assert!(flow.pending().is_none());
    }

    #[test]
    fn test_reselect_restarts_pending_transition() {
        let mut flow = flow_at_career("Ada");
        let t0 = Instant::now();
        flow.select_career("web", t0).unwrap();

        let t1 = t0 + Duration::from_millis(200);
        flow.select_career("devops", t1).unwrap();
        assert_eq!(flow.next_deadline(), Some(t1 + DEFAULT_ADVANCE_DELAY));

        // The first deadline passes without a transition
        assert!(flow.poll_deferred(t0 + DEFAULT_ADVANCE_DELAY).is_empty());

        let out = flow.poll_deferred(t1 + DEFAULT_ADVANCE_DELAY);
        assert!(out.contains(&Instruction::SetDisplayText {
            field: FieldId::SelectedCareer,
            text: "DevOps / Cloud".to_string(),
        }));
        assert_eq!(flow.state().career(), Some(CareerKey::Devops));

        // Only one transition fires
        assert!(flow.poll_deferred(t1 + DEFAULT_ADVANCE_DELAY * 4).is_empty());
    }

    #[test]
    fn test_go_back_keeps_name() {
        let mut flow = flow_at_career("Ada");

        assert_eq!(
            flow.go_back(),
            vec![
                Instruction::SetStepVisible {
                    step: WizardStep::Name
                },
                Instruction::SetProgress { ratio: 0.0 },
                Instruction::FocusField {
                    field: FieldId::NameInput
                },
            ]
        );
        assert_eq!(flow.current_step(), WizardStep::Name);
        assert_eq!(flow.state().name(), "Ada");

        assert_eq!(
            flow.set_name("Ada"),
            vec![Instruction::SetContinueEnabled { enabled: true }]
        );
    }

    #[test]
    fn test_go_back_cancels_pending_transition() {
        let mut flow = flow_at_career("Ada");
        let now = Instant::now();
        flow.select_career("mobile", now).unwrap();

        flow.go_back();
        assert!(flow.pending().is_none());
        assert!(flow.poll_deferred(now + DEFAULT_ADVANCE_DELAY).is_empty());
        assert_eq!(flow.current_step(), WizardStep::Name);
    }

    #[test]
    fn test_go_back_outside_career_is_noop() {
        let mut flow = OnboardingFlow::new();
        assert!(flow.go_back().is_empty());
        assert_eq!(flow.current_step(), WizardStep::Name);
    }

    #[test]
    fn test_request_roadmap_only_on_summary() {
        let mut flow = flow_at_career("Ada");
        assert!(flow.request_roadmap().is_empty());

        let now = Instant::now();
        flow.select_career("web", now).unwrap();
        flow.poll_deferred(now + DEFAULT_ADVANCE_DELAY);

        assert_eq!(
            flow.request_roadmap(),
            vec![Instruction::Notify {
                request: RoadmapRequest {
                    name: "Ada".to_string(),
                    career_label: "Web Development".to_string(),
                }
            }]
        );
        assert_eq!(flow.current_step(), WizardStep::Summary);
    }

    #[test]
    fn test_summary_is_terminal() {
        let mut flow = flow_at_career("Ada");
        let now = Instant::now();
        flow.select_career("web", now).unwrap();
        flow.poll_deferred(now + DEFAULT_ADVANCE_DELAY);

        assert!(flow.go_back().is_empty());
        assert!(flow.confirm_name().is_empty());
        assert!(flow.select_career("data", now).unwrap().is_empty());
        assert_eq!(flow.current_step(), WizardStep::Summary);
        assert_eq!(flow.state().career(), Some(CareerKey::Web));
    }

    #[test]
    fn test_progress_ratio_per_step() {
        let mut flow = OnboardingFlow::with_delay(Duration::ZERO);
        assert!((flow.progress_ratio() - 0.0).abs() < f64::EPSILON);

        flow.set_name("Ada");
        flow.confirm_name();
        assert!((flow.progress_ratio() - 0.5).abs() < f64::EPSILON);

        let now = Instant::now();
        flow.select_career("data", now).unwrap();
        flow.poll_deferred(now);
        assert!((flow.progress_ratio() - 1.0).abs() < f64::EPSILON);
    }
}
