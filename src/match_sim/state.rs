use crate::config::MatchConfig;
use crate::profile::CompetitorProfile;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schema::{ShotCategory, Surface, Tactic, Weather, CATEGORY_COUNT};
use serde::{Deserialize, Serialize};

/// Pressure floor enforced for the duration of a tiebreak.
pub const TIEBREAK_PRESSURE_FLOOR: u8 = 85;

/// Side identifier - provides type safety over raw indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Home => 0,
            Side::Away => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn from_index(index: usize) -> Side {
        match index {
            0 => Side::Home,
            1 => Side::Away,
            _ => panic!("Invalid side index: {}", index),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

/// Sequential randomness oracle for one match.
///
/// Every stochastic decision in the engine consumes outcomes from this
/// source in a fixed, documented order, so a match is a pure function of
/// (profiles, config, seed). Tests inject a scripted outcome vector to pin
/// individual branches.
#[derive(Debug)]
pub struct MatchRng {
    source: RngSource,
}

#[derive(Debug)]
enum RngSource {
    Scripted { outcomes: Vec<u8>, index: usize },
    Seeded(StdRng),
}

impl MatchRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            source: RngSource::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn new_random() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Next outcome in 1..=100.
    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        let outcome = match &mut self.source {
            RngSource::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    // Add the reason to the panic message for better debugging!
                    panic!(
                        "MatchRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                        reason
                    );
                }
                let outcome = outcomes[*index];
                *index += 1;
                outcome
            }
            RngSource::Seeded(rng) => rng.random_range(1..=100),
        };

        // Print the consumption event to the console during tests.
        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        outcome
    }

    /// Next outcome mapped to a uniform fraction in [0, 1).
    pub fn next_fraction(&mut self, reason: &str) -> f64 {
        (self.next_outcome(reason) - 1) as f64 / 100.0
    }
}

/// The currently active tactical instruction. While `remaining_effect > 0`
/// it is applied identically to both sides of every point; it is cleared
/// exactly when the counter reaches 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveInstruction {
    pub label: String,
    pub remaining_effect: u8,
    pub skill_multiplier: f64,
    pub flat_bonus: i32,
    pub crit_bonus: f64,
}

/// Mutable state threaded through one simulated set.
/// Exclusively owned by the match computation that created it; it never
/// escapes to another match or thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchContext {
    pub match_id: String,
    pub competitors: [CompetitorProfile; 2],
    /// Effective tactic per side, config overrides already applied.
    pub tactics: [Tactic; 2],
    pub weather: Weather,
    pub surface: Surface,
    pub pressure_level: u8,
    pub rally_count: u32,
    /// Points in the current game.
    pub game_score: [u8; 2],
    /// Games in the current set.
    pub set_score: [u8; 2],
    pub tiebreak_score: [u8; 2],
    pub in_tiebreak: bool,
    pub active_instruction: Option<ActiveInstruction>,
}

impl MatchContext {
    pub fn new(
        match_id: &str,
        home: CompetitorProfile,
        away: CompetitorProfile,
        config: &MatchConfig,
    ) -> Self {
        let tactics = [
            config.tactic_overrides[0].unwrap_or(home.tactic),
            config.tactic_overrides[1].unwrap_or(away.tactic),
        ];
        Self {
            match_id: match_id.to_string(),
            competitors: [home, away],
            tactics,
            weather: config.weather,
            surface: config.surface,
            pressure_level: config.initial_pressure.min(100),
            rally_count: 0,
            game_score: [0, 0],
            set_score: [0, 0],
            tiebreak_score: [0, 0],
            in_tiebreak: false,
            active_instruction: None,
        }
    }

    pub fn competitor(&self, side: Side) -> &CompetitorProfile {
        &self.competitors[side.index()]
    }

    pub fn tactic(&self, side: Side) -> Tactic {
        self.tactics[side.index()]
    }

    /// Raise pressure, clamped to 100. The tiebreak floor is re-applied.
    pub fn raise_pressure(&mut self, amount: u8) {
        self.pressure_level = self.pressure_level.saturating_add(amount).min(100);
        self.apply_pressure_floor();
    }

    /// Lower pressure, clamped to 0. The tiebreak floor is re-applied.
    pub fn reduce_pressure(&mut self, amount: u8) {
        self.pressure_level = self.pressure_level.saturating_sub(amount);
        self.apply_pressure_floor();
    }

    fn apply_pressure_floor(&mut self) {
        if self.in_tiebreak && self.pressure_level < TIEBREAK_PRESSURE_FLOOR {
            self.pressure_level = TIEBREAK_PRESSURE_FLOOR;
        }
    }

    /// Frozen view of the context as it stood when a point was resolved.
    /// During a tiebreak the point-score pair is the tiebreak score.
    pub fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot {
            pressure_level: self.pressure_level,
            rally_count: self.rally_count,
            game_score: if self.in_tiebreak {
                self.tiebreak_score
            } else {
                self.game_score
            },
            set_score: self.set_score,
            in_tiebreak: self.in_tiebreak,
        }
    }
}

/// Immutable copy of the interesting parts of `MatchContext`, stored on
/// every `PointRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSnapshot {
    pub pressure_level: u8,
    pub rally_count: u32,
    pub game_score: [u8; 2],
    pub set_score: [u8; 2],
    pub in_tiebreak: bool,
}

/// Contributing terms of one side's resolved skill for the chosen category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillBreakdown {
    pub base: i32,
    pub trait_bonus: i32,
    pub tactic_multiplier: f64,
    pub condition_multiplier: f64,
    pub environment_multiplier: f64,
    pub instruction_applied: bool,
    pub final_value: i32,
}

/// Immutable record of one resolved point. Created by the point resolver
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    /// Position in the set's point log.
    pub index: usize,
    pub category: ShotCategory,
    pub skills: [SkillBreakdown; 2],
    /// Raw outcomes consumed per side: [spread roll, steady roll].
    pub rolls: [[u8; 2]; 2],
    pub totals: [i32; 2],
    pub winner: Side,
    pub margin: i32,
    pub critical: bool,
    /// Resolved critical-hit probability for this point.
    pub crit_rate: f64,
    pub triggered_trait: Option<String>,
    /// Synthesized rally length, for the longest-rally statistic.
    pub rally_shots: u8,
    pub context: ContextSnapshot,
}

/// Per-side running totals, accumulated monotonically during simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStatistics {
    pub total_points_won: u32,
    pub points_won_by_category: [u32; CATEGORY_COUNT],
    pub games_won: u32,
    pub tiebreak_points_won: u32,
    pub critical_hits: u32,
    pub trait_triggers: u32,
    pub longest_rally: u8,
}

/// A heuristically flagged pivotal point, surfaced for narrative/analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurningPoint {
    pub point_index: usize,
    /// 0..=10; pressure-driven, critical hits weigh extra.
    pub importance: u8,
    pub critical: bool,
    pub trait_triggered: bool,
    pub competitive_game: bool,
}

/// Final product of one simulated set. Constructed once and immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetResult {
    pub match_id: String,
    pub set_score: [u8; 2],
    pub winner: Side,
    pub log: Vec<PointRecord>,
    pub stats: [MatchStatistics; 2],
    pub turning_points: Vec<TurningPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    // Match flow
    SetStarted {
        weather: Weather,
        surface: Surface,
    },
    GameStarted {
        game_number: u32,
    },
    GameWon {
        side: Side,
        set_score: [u8; 2],
    },
    TiebreakStarted {
        pressure_level: u8,
    },
    SetWon {
        side: Side,
        set_score: [u8; 2],
    },

    // Point outcomes
    PointResolved {
        point_index: usize,
        winner: Side,
        category: ShotCategory,
        margin: i32,
        rally_shots: u8,
    },
    CriticalHit {
        winner: Side,
    },
    TraitTriggered {
        side: Side,
        trait_id: String,
    },

    // Pressure & instructions
    PressureRose {
        level: u8,
    },
    InstructionApplied {
        label: String,
        duration: u8,
    },
    InstructionRejected {
        label: String,
        reason: String,
    },
    InstructionExpired {
        label: String,
    },
}

impl MatchEvent {
    /// Human-readable line for this event, given the two competitor names.
    /// Returns `None` for events with no narrative value.
    pub fn format(&self, names: [&str; 2]) -> Option<String> {
        match self {
            // === Match Flow Events ===
            MatchEvent::SetStarted { weather, surface } => Some(format!(
                "{} vs {} under {} on {}.",
                names[0],
                names[1],
                weather.display_name(),
                surface.display_name()
            )),
            MatchEvent::GameStarted { game_number } => Some(format!("Game {}.", game_number)),
            MatchEvent::GameWon { side, set_score } => Some(format!(
                "{} takes the game. Games: {}-{}.",
                names[side.index()],
                set_score[0],
                set_score[1]
            )),
            MatchEvent::TiebreakStarted { pressure_level } => Some(format!(
                "Six games all! Into the tiebreak, tension at {}.",
                pressure_level
            )),
            MatchEvent::SetWon { side, set_score } => Some(format!(
                "{} wins the set {}-{}!",
                names[side.index()],
                set_score[0],
                set_score[1]
            )),

            // === Point Events ===
            MatchEvent::PointResolved {
                winner,
                category,
                margin,
                rally_shots,
                ..
            } => {
                let name = names[winner.index()];
                if *margin >= 15 {
                    Some(format!(
                        "{} dominates a {}-shot exchange on {}.",
                        name,
                        rally_shots,
                        category.display_name()
                    ))
                } else {
                    Some(format!(
                        "{} edges a {}-shot exchange on {}.",
                        name,
                        rally_shots,
                        category.display_name()
                    ))
                }
            }
            MatchEvent::CriticalHit { winner } => {
                Some(format!("A stunning winner from {}!", names[winner.index()]))
            }
            MatchEvent::TraitTriggered { side, trait_id } => Some(format!(
                "{}'s {} comes alive!",
                names[side.index()],
                trait_id.replace('_', " ")
            )),

            // === Pressure & Instruction Events ===
            MatchEvent::PressureRose { level } => {
                Some(format!("The tension rises ({}).", level))
            }
            MatchEvent::InstructionApplied { label, duration } => Some(format!(
                "Coaching instruction: {} (next {} points).",
                label, duration
            )),
            MatchEvent::InstructionExpired { label } => {
                Some(format!("The '{}' instruction wears off.", label))
            }
            // Rejections are bookkeeping, not narration.
            MatchEvent::InstructionRejected { .. } => None,
        }
    }
}

/// Ordered collection of the events one simulation produced.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<MatchEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events using their formatted text (when available).
    /// Falls back to debug format for silent events.
    pub fn print_formatted(&self, names: [&str; 2]) {
        for event in &self.events {
            match event.format(names) {
                Some(formatted) => println!("  {}", formatted),
                None => println!("  {:?} (silent)", event),
            }
        }
    }
}
