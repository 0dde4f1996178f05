// ABOUTME: Configuration for the Orvia onboarding binary
// Wizard timing and logging settings read from ~/.orvia/config

pub mod onboarding;

pub use onboarding::OnboardingConfig;
