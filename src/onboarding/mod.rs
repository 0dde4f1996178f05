// ABOUTME: Onboarding wizard core for the Orvia learning flow
// Step state machine, career catalog and the render instruction protocol

pub mod catalog;
pub mod error;
pub mod flow;
pub mod state;

pub use catalog::{CareerCatalog, CareerKey};
pub use error::OnboardingError;
pub use flow::{OnboardingFlow, PendingTransition, DEFAULT_ADVANCE_DELAY};
pub use state::{FieldId, Instruction, RoadmapRequest, WizardState, WizardStep};
