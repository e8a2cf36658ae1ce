use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Five-level physical condition tier. Multiplies every resolved skill value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Default,
)]
pub enum ConditionTier {
    Excellent,
    Good,
    #[default]
    Normal,
    Poor,
    Terrible,
}

impl ConditionTier {
    /// Fixed skill multiplier for this tier.
    pub fn multiplier(self) -> f64 {
        match self {
            ConditionTier::Excellent => 1.2,
            ConditionTier::Good => 1.1,
            ConditionTier::Normal => 1.0,
            ConditionTier::Poor => 0.85,
            ConditionTier::Terrible => 0.7,
        }
    }

    /// Human-readable name for narrative output.
    pub fn display_name(self) -> &'static str {
        match self {
            ConditionTier::Excellent => "in peak form",
            ConditionTier::Good => "in good form",
            ConditionTier::Normal => "steady",
            ConditionTier::Poor => "off the boil",
            ConditionTier::Terrible => "running on empty",
        }
    }
}

impl fmt::Display for ConditionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
