use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Weather during a match. Feeds the environment multiplier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Weather {
    Clear,
    Windy,
    Hot,
    Humid,
}

impl Weather {
    pub fn display_name(self) -> &'static str {
        match self {
            Weather::Clear => "clear skies",
            Weather::Windy => "gusting wind",
            Weather::Hot => "baking heat",
            Weather::Humid => "heavy humidity",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Court surface. Feeds the environment multiplier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Surface {
    Hard,
    Clay,
    Grass,
    Indoor,
}

impl Surface {
    pub fn display_name(self) -> &'static str {
        match self {
            Surface::Hard => "hard court",
            Surface::Clay => "clay",
            Surface::Grass => "grass",
            Surface::Indoor => "indoor court",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
