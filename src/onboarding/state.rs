// ABOUTME: State and instruction types for the onboarding wizard
// Tracks the current step and collected inputs, and defines what the presentation layer is told

use serde::Serialize;
use std::fmt;

use super::catalog::CareerKey;

/// Steps in the onboarding wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Name,
    Career,
    Summary,
}

impl WizardStep {
    /// Get all steps in order
    pub const fn all() -> &'static [Self] {
        &[Self::Name, Self::Career, Self::Summary]
    }

    /// Get the step number (1-indexed for display)
    pub const fn number(&self) -> usize {
        match self {
            Self::Name => 1,
            Self::Career => 2,
            Self::Summary => 3,
        }
    }

    /// Get the total number of steps
    pub const fn total() -> usize {
        3
    }

    /// Get display title for this step
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Career => "Career Track",
            Self::Summary => "All Set",
        }
    }

    /// Get the next step, if any
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Name => Some(Self::Career),
            Self::Career => Some(Self::Summary),
            Self::Summary => None,
        }
    }

    /// Get the previous step reachable through "back", if any
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::Career => Some(Self::Name),
            Self::Name | Self::Summary => None,
        }
    }

    /// Fraction of the wizard completed when this step is showing
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        (self.number() - 1) as f64 / (Self::total() - 1) as f64
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Mutable wizard record owned by a single [`OnboardingFlow`](super::OnboardingFlow)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub(super) current_step: WizardStep,
    pub(super) name: String,
    pub(super) career: Option<CareerKey>,
}

impl WizardState {
    pub const fn new() -> Self {
        Self {
            current_step: WizardStep::Name,
            name: String::new(),
            career: None,
        }
    }

    pub const fn current_step(&self) -> WizardStep {
        self.current_step
    }

    /// Trimmed name entered on the first step
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn career(&self) -> Option<CareerKey> {
        self.career
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Text fields the presentation layer knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// Name text input on the first step
    NameInput,
    /// Greeting name on the career step
    DisplayName,
    /// Career headline on the summary step
    SelectedCareer,
    SummaryName,
    SummaryCareer,
}

/// Payload handed to the roadmap collaborator when the user asks for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapRequest {
    pub name: String,
    pub career_label: String,
}

impl fmt::Display for RoadmapRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ready to show {}'s {} roadmap!", self.name, self.career_label)
    }
}

/// Render instruction emitted by the wizard for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Instruction {
    /// Show exactly this step's screen
    SetStepVisible { step: WizardStep },
    /// Progress indicator fill, in `[0, 1]`
    SetProgress { ratio: f64 },
    SetContinueEnabled { enabled: bool },
    SetDisplayText { field: FieldId, text: String },
    /// Mark one career option as chosen and clear the others
    SetSelected { career: CareerKey },
    FocusField { field: FieldId },
    Notify { request: RoadmapRequest },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetStepVisible { step } => write!(f, "show step {} ({})", step.number(), step),
            Self::SetProgress { ratio } => write!(f, "progress {:.0}%", ratio * 100.0),
            Self::SetContinueEnabled { enabled } => {
                write!(f, "continue {}", if *enabled { "enabled" } else { "disabled" })
            }
            Self::SetDisplayText { field, text } => write!(f, "text {field:?} = {text:?}"),
            Self::SetSelected { career } => write!(f, "selected {career}"),
            Self::FocusField { field } => write!(f, "focus {field:?}"),
            Self::Notify { request } => write!(f, "notify: {request}"),
        }
    }
}
