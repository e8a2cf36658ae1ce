use crate::categories::ShotCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// The six play-style presets a competitor can enter a match with.
/// Each tactic defines per-category skill multipliers; see `multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Tactic {
    Balanced,
    Aggressive,
    Defensive,
    ServeAndVolley,
    Counterpunch,
    MindGame,
}

/// Broad classification used by the shot-category selector to shift
/// selection weights. Individual multipliers stay on the tactic itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Offensive,
    Neutral,
    Defensive,
}

impl Tactic {
    /// Skill multiplier this tactic applies to a shot category.
    /// Combinations without an entry are identity (1.0).
    pub fn multiplier(self, category: ShotCategory) -> f64 {
        use ShotCategory::*;

        match (self, category) {
            (Tactic::Balanced, _) => 1.0,

            // Aggressive play trades groundstroke security for the front court
            (Tactic::Aggressive, Serve) | (Tactic::Aggressive, Net) => 1.3,
            (Tactic::Aggressive, Return) | (Tactic::Aggressive, Baseline) => 0.8,

            // Defensive play is the mirror image
            (Tactic::Defensive, Serve) | (Tactic::Defensive, Net) => 0.8,
            (Tactic::Defensive, Return) | (Tactic::Defensive, Baseline) => 1.3,

            // Serve-and-volley lives and dies at the net
            (Tactic::ServeAndVolley, Serve) => 1.4,
            (Tactic::ServeAndVolley, Net) => 1.2,
            (Tactic::ServeAndVolley, Baseline) => 0.85,

            // Counterpunching absorbs pace and redirects it
            (Tactic::Counterpunch, Return) => 1.35,
            (Tactic::Counterpunch, Baseline) => 1.15,
            (Tactic::Counterpunch, Net) => 0.85,

            // Mind-game players win the long exchanges between the ears
            (Tactic::MindGame, Composure) => 1.3,
            (Tactic::MindGame, Net) => 0.9,

            _ => 1.0,
        }
    }

    /// Style class for selection-weight shifts.
    pub fn style_class(self) -> StyleClass {
        match self {
            Tactic::Aggressive | Tactic::ServeAndVolley => StyleClass::Offensive,
            Tactic::Defensive | Tactic::Counterpunch => StyleClass::Defensive,
            Tactic::Balanced | Tactic::MindGame => StyleClass::Neutral,
        }
    }

    /// Human-readable name for narrative output.
    pub fn display_name(self) -> &'static str {
        match self {
            Tactic::Balanced => "balanced",
            Tactic::Aggressive => "aggressive",
            Tactic::Defensive => "defensive",
            Tactic::ServeAndVolley => "serve-and-volley",
            Tactic::Counterpunch => "counterpunch",
            Tactic::MindGame => "mind game",
        }
    }
}

impl fmt::Display for Tactic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
