// In: src/lib.rs

//! Match-Point Simulation Engine
//!
//! A point-by-point racquet-sport match simulator: layered skill-modifier
//! resolution, weighted shot-category selection, pressure-aware point
//! resolution, and game/set/tiebreak state machines, all fed by one
//! sequential randomness oracle so a match is bit-for-bit reproducible
//! from its seed.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod config;
pub mod errors;
pub mod match_sim;
pub mod prefab_competitors;
pub mod profile;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `match-point` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the shared vocabulary enums.
pub use schema::{
    ConditionTier, ShotCategory, StyleClass, Surface, Tactic, Weather, CATEGORY_COUNT,
};

// --- From this crate's modules (`src/`) ---

// Core engine entry points and phase machines.
pub use match_sim::engine::{
    issue_instruction, set_phase, simulate_set, simulate_set_with_coaches, GamePhase, SetPhase,
};

// Core runtime state, records, and events.
pub use match_sim::state::{
    ActiveInstruction, ContextSnapshot, EventBus, MatchContext, MatchEvent, MatchRng,
    MatchStatistics, PointRecord, SetResult, Side, SkillBreakdown, TurningPoint,
};

// Input types handed over by collaborators.
pub use config::{Instruction, MatchConfig, ScheduledInstruction};
pub use profile::{CompetitorProfile, TraitKit, TraitTrigger, BASELINE_RATING};

// High-level interfaces.
pub use match_sim::coach::{CoachPolicy, ScoringCoach};
pub use match_sim::runner::{MatchRunner, SetInfo};

// Crate-specific error and result types.
pub use errors::{
    ConfigError, DivergenceScope, EngineError, ProfileDataError, SimResult, SimulationError,
};
