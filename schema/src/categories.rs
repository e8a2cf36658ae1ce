use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Number of shot categories; array-keyed tables use this length.
pub const CATEGORY_COUNT: usize = 5;

/// The closed set of shot categories a point can be decided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum ShotCategory {
    Serve,
    Return,
    Net,
    Baseline,
    Composure,
}

impl ShotCategory {
    /// Stable index into `[T; CATEGORY_COUNT]` tables.
    pub fn index(self) -> usize {
        match self {
            ShotCategory::Serve => 0,
            ShotCategory::Return => 1,
            ShotCategory::Net => 2,
            ShotCategory::Baseline => 3,
            ShotCategory::Composure => 4,
        }
    }

    /// All categories in table order. The category selector walks this order.
    pub fn all() -> [ShotCategory; CATEGORY_COUNT] {
        [
            ShotCategory::Serve,
            ShotCategory::Return,
            ShotCategory::Net,
            ShotCategory::Baseline,
            ShotCategory::Composure,
        ]
    }

    /// Human-readable name for narrative output.
    pub fn display_name(self) -> &'static str {
        match self {
            ShotCategory::Serve => "serve",
            ShotCategory::Return => "return",
            ShotCategory::Net => "net play",
            ShotCategory::Baseline => "baseline rally",
            ShotCategory::Composure => "composure",
        }
    }
}

impl fmt::Display for ShotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
