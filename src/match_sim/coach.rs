//! Coaching behaviors that can issue instructions between games.

use crate::config::Instruction;
use crate::match_sim::state::{MatchContext, Side};

/// A system that can decide on a between-games instruction.
/// This is the seam for external coaching-decision logic; the engine ships
/// a scoring default below.
pub trait CoachPolicy {
    /// Inspects the match context and decides whether to issue an
    /// instruction for the given side. `None` means hold off.
    fn decide_instruction(&self, side: Side, ctx: &MatchContext) -> Option<Instruction>;
}

/// Minimum score an instruction must reach before the coach speaks up.
/// Keeps quiet matches quiet.
const MIN_INSTRUCTION_SCORE: f64 = 8.0;

pub struct ScoringCoach;

impl ScoringCoach {
    pub fn new() -> Self {
        Self
    }

    fn candidates(&self) -> Vec<Instruction> {
        vec![
            Instruction {
                label: "settle down".to_string(),
                duration: 4,
                skill_multiplier: 1.0,
                flat_bonus: 0,
                crit_bonus: 0.0,
                pressure_relief: 15,
            },
            Instruction {
                label: "all-out attack".to_string(),
                duration: 3,
                skill_multiplier: 1.15,
                flat_bonus: 0,
                crit_bonus: 0.05,
                pressure_relief: 0,
            },
            Instruction {
                label: "play the percentages".to_string(),
                duration: 6,
                skill_multiplier: 1.05,
                flat_bonus: 2,
                crit_bonus: 0.0,
                pressure_relief: 5,
            },
        ]
    }

    /// The core scoring logic. Calming instructions matter under pressure,
    /// boosts matter when trailing on games.
    fn score_instruction(&self, instruction: &Instruction, side: Side, ctx: &MatchContext) -> f64 {
        let games_behind = ctx.set_score[side.opponent().index()] as f64
            - ctx.set_score[side.index()] as f64;
        let pressure = ctx.pressure_level as f64;

        instruction.pressure_relief as f64 * (pressure / 100.0)
            + (instruction.skill_multiplier - 1.0) * 40.0 * games_behind.max(0.0)
            + instruction.crit_bonus * 20.0 * games_behind.max(0.0)
    }
}

impl Default for ScoringCoach {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachPolicy for ScoringCoach {
    fn decide_instruction(&self, side: Side, ctx: &MatchContext) -> Option<Instruction> {
        // One instruction at a time; never talk over an active one.
        if ctx.active_instruction.is_some() {
            return None;
        }

        let best = self
            .candidates()
            .into_iter()
            .map(|instruction| {
                let score = self.score_instruction(&instruction, side, ctx);
                (instruction, score)
            })
            .max_by_key(|(_, score)| ordered_float::OrderedFloat(*score));

        match best {
            Some((instruction, score)) if score >= MIN_INSTRUCTION_SCORE => Some(instruction),
            _ => None,
        }
    }
}
