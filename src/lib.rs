// ABOUTME: Library crate for the Orvia onboarding wizard
// Exposes the step state machine, its instruction protocol and the drivers around it

#![allow(missing_docs)]

pub mod config;
pub mod input;
pub mod onboarding;
pub mod presenter;
pub mod script;
pub mod session;
