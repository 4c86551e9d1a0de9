use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of maintenance action reported for a scooter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Scooter was seen in the field
    Seen,
    /// Battery was swapped
    Battery,
    /// Scooter was flagged for repair
    Repair,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [Self::Seen, Self::Battery, Self::Repair];

    /// Stable wire/storage name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seen => "seen",
            Self::Battery => "battery",
            Self::Repair => "repair",
        }
    }
}

impl FromStr for ActionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "seen" => Ok(Self::Seen),
            "battery" => Ok(Self::Battery),
            "repair" => Ok(Self::Repair),
            other => Err(DomainError::UnknownAction(other.to_string())),
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
