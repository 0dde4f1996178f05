// ABOUTME: Error types for the onboarding wizard core

use thiserror::Error;

/// Errors surfaced by [`OnboardingFlow`](super::OnboardingFlow) operations.
///
/// Calls made from the wrong step are not errors; they are silently ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OnboardingError {
    /// A career key outside the fixed catalog was passed to `select_career`
    #[error("Invalid career key '{0}' (expected one of: web, mobile, data, devops)")]
    InvalidCareerKey(String),
}

/// Result alias for onboarding operations
pub type Result<T> = std::result::Result<T, OnboardingError>;
