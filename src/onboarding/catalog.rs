// ABOUTME: Career track catalog for the onboarding wizard
// Fixed set of career keys and their human-readable labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::OnboardingError;

/// Career track a user can pick on the second step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerKey {
    Web,
    Mobile,
    Data,
    Devops,
}

impl CareerKey {
    /// All career keys in display order
    pub const fn all() -> &'static [Self] {
        &[Self::Web, Self::Mobile, Self::Data, Self::Devops]
    }

    /// Wire identifier (e.g. "web")
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Data => "data",
            Self::Devops => "devops",
        }
    }

    /// Display label shown on the summary screen
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Web => "Web Development",
            Self::Mobile => "Mobile Development",
            Self::Data => "Data Science / ML",
            Self::Devops => "DevOps / Cloud",
        }
    }

    /// Look up a key by its 1-indexed position in the option list
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|idx| Self::all().get(idx))
            .copied()
    }
}

impl fmt::Display for CareerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CareerKey {
    type Err = OnboardingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| OnboardingError::InvalidCareerKey(s.to_string()))
    }
}

/// Read-only mapping from career identifier to display label
pub struct CareerCatalog;

impl CareerCatalog {
    /// Resolve a raw identifier to its label, if it is in the catalog
    pub fn label(key: &str) -> Option<&'static str> {
        key.parse::<CareerKey>().ok().map(|k| k.label())
    }

    /// Iterate `(identifier, label)` pairs in display order
    pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
        CareerKey::all().iter().map(|k| (k.as_str(), k.label()))
    }

    /// Number of career tracks offered
    pub const fn len() -> usize {
        CareerKey::all().len()
    }
}
