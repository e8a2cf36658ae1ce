use crate::config::{Instruction, MatchConfig};
use crate::errors::{DivergenceScope, SimResult, SimulationError};
use crate::match_sim::aggregator::SetLedger;
use crate::match_sim::coach::CoachPolicy;
use crate::match_sim::commands::execute_command_batch;
use crate::match_sim::point::calculate_point_outcome;
use crate::match_sim::state::{
    ActiveInstruction, EventBus, MatchContext, MatchEvent, MatchRng, SetResult, Side,
};
use crate::profile::CompetitorProfile;

/// Points needed to win a game (with a 2-point lead).
pub const GAME_WIN_POINTS: u8 = 4;

/// Games needed to win a set (with a 2-game lead).
pub const SET_WIN_GAMES: u8 = 6;

/// Points needed to win a tiebreak (with a 2-point lead).
pub const TIEBREAK_WIN_POINTS: u8 = 7;

/// Hard ceiling on points in one game or tiebreak. The win-by-2 rule can
/// in principle extend forever; hitting this ceiling aborts the match.
pub const MAX_POINTS_PER_GAME: u32 = 200;

/// Pressure spike when the set reaches the tiebreak.
pub const TIEBREAK_PRESSURE_SPIKE: u8 = 20;

/// Pressure rise after a game that leaves the set score lopsided.
pub const LOPSIDED_GAME_PRESSURE_RISE: u8 = 5;

/// Progress of the game (or tiebreak) currently being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    InProgress,
    Won(Side),
}

/// Progress of the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetPhase {
    InProgress,
    TiebreakActive,
    Won(Side),
}

/// Win check shared by games and tiebreaks: first to `target` with a lead
/// of at least 2. Advantage continues indefinitely while the lead is short.
pub fn game_phase(score: [u8; 2], target: u8) -> GamePhase {
    let (leader, lead, trail) = if score[0] >= score[1] {
        (Side::Home, score[0], score[1])
    } else {
        (Side::Away, score[1], score[0])
    };

    if lead >= target && lead - trail >= 2 {
        GamePhase::Won(leader)
    } else {
        GamePhase::InProgress
    }
}

/// Set-level transition check: 6 games with a 2-game lead wins the set;
/// 6-6 activates the tiebreak.
pub fn set_phase(set_score: [u8; 2]) -> SetPhase {
    if set_score == [SET_WIN_GAMES, SET_WIN_GAMES] {
        return SetPhase::TiebreakActive;
    }
    match game_phase(set_score, SET_WIN_GAMES) {
        GamePhase::Won(side) => SetPhase::Won(side),
        GamePhase::InProgress => SetPhase::InProgress,
    }
}

/// Simulate one set between two competitors. The entire computation is
/// synchronous and deterministic for a given RNG stream; the only failure
/// mode is the divergence ceiling.
pub fn simulate_set(
    match_id: &str,
    home: CompetitorProfile,
    away: CompetitorProfile,
    config: &MatchConfig,
    rng: &mut MatchRng,
) -> SimResult<(SetResult, EventBus)> {
    simulate_set_with_coaches(match_id, home, away, config, [None, None], rng)
}

/// `simulate_set` with optional coaching policies consulted between games.
pub fn simulate_set_with_coaches(
    match_id: &str,
    home: CompetitorProfile,
    away: CompetitorProfile,
    config: &MatchConfig,
    coaches: [Option<&dyn CoachPolicy>; 2],
    rng: &mut MatchRng,
) -> SimResult<(SetResult, EventBus)> {
    let mut ctx = MatchContext::new(match_id, home, away, config);
    let mut ledger = SetLedger::new();
    let mut bus = EventBus::new();
    bus.push(MatchEvent::SetStarted {
        weather: ctx.weather,
        surface: ctx.surface,
    });

    let mut games_completed: u8 = 0;
    let winner = loop {
        match set_phase(ctx.set_score) {
            SetPhase::Won(side) => break side,
            SetPhase::TiebreakActive => {
                ctx.in_tiebreak = true;
                ctx.tiebreak_score = [0, 0];
                ctx.raise_pressure(TIEBREAK_PRESSURE_SPIKE);
                bus.push(MatchEvent::TiebreakStarted {
                    pressure_level: ctx.pressure_level,
                });

                let side = play_tiebreak(&mut ctx, &mut ledger, &mut bus, rng)?;
                ctx.set_score[side.index()] += 1;
                ledger.record_game_won(side);
                break side;
            }
            SetPhase::InProgress => {
                apply_scheduled_instructions(&mut ctx, config, games_completed, &mut bus);
                apply_coach_policies(&mut ctx, &coaches, &mut bus);

                bus.push(MatchEvent::GameStarted {
                    game_number: games_completed as u32 + 1,
                });
                let side = play_game(&mut ctx, &mut ledger, &mut bus, rng)?;
                ctx.set_score[side.index()] += 1;
                games_completed += 1;
                ledger.record_game_won(side);
                bus.push(MatchEvent::GameWon {
                    side,
                    set_score: ctx.set_score,
                });

                // A runaway scoreline keeps the trailing side under the pump
                if ctx.set_score[0].abs_diff(ctx.set_score[1]) >= 2 {
                    ctx.raise_pressure(LOPSIDED_GAME_PRESSURE_RISE);
                    bus.push(MatchEvent::PressureRose {
                        level: ctx.pressure_level,
                    });
                }
            }
        }
    };

    bus.push(MatchEvent::SetWon {
        side: winner,
        set_score: ctx.set_score,
    });
    Ok((ledger.into_result(match_id, ctx.set_score, winner), bus))
}

/// Play one game to completion: first to 4 points, win by 2, advantage
/// extending indefinitely under the divergence ceiling.
pub(crate) fn play_game(
    ctx: &mut MatchContext,
    ledger: &mut SetLedger,
    bus: &mut EventBus,
    rng: &mut MatchRng,
) -> Result<Side, SimulationError> {
    ctx.game_score = [0, 0];
    let mut points_played: u32 = 0;

    loop {
        if let GamePhase::Won(side) = game_phase(ctx.game_score, GAME_WIN_POINTS) {
            return Ok(side);
        }
        if points_played >= MAX_POINTS_PER_GAME {
            return Err(SimulationError::Divergence {
                scope: DivergenceScope::Game,
                points: points_played,
                limit: MAX_POINTS_PER_GAME,
            });
        }

        let commands = calculate_point_outcome(ctx, ledger.log.len(), rng);
        execute_command_batch(commands, ctx, ledger, bus);
        points_played += 1;
    }
}

/// Play the tiebreak to completion: first to 7 points, win by 2.
pub(crate) fn play_tiebreak(
    ctx: &mut MatchContext,
    ledger: &mut SetLedger,
    bus: &mut EventBus,
    rng: &mut MatchRng,
) -> Result<Side, SimulationError> {
    let mut points_played: u32 = 0;

    loop {
        if let GamePhase::Won(side) = game_phase(ctx.tiebreak_score, TIEBREAK_WIN_POINTS) {
            return Ok(side);
        }
        if points_played >= MAX_POINTS_PER_GAME {
            return Err(SimulationError::Divergence {
                scope: DivergenceScope::Tiebreak,
                points: points_played,
                limit: MAX_POINTS_PER_GAME,
            });
        }

        let commands = calculate_point_outcome(ctx, ledger.log.len(), rng);
        execute_command_batch(commands, ctx, ledger, bus);
        points_played += 1;
    }
}

/// Validate and activate an instruction. Malformed instructions are dropped
/// with a rejection event; the simulation proceeds unaffected.
pub fn issue_instruction(ctx: &mut MatchContext, instruction: &Instruction, bus: &mut EventBus) {
    if let Err(reason) = instruction.validate() {
        bus.push(MatchEvent::InstructionRejected {
            label: instruction.label.clone(),
            reason,
        });
        return;
    }

    // Pressure relief lands once, at activation
    ctx.reduce_pressure(instruction.pressure_relief);
    ctx.active_instruction = Some(ActiveInstruction {
        label: instruction.label.clone(),
        remaining_effect: instruction.duration,
        skill_multiplier: instruction.skill_multiplier,
        flat_bonus: instruction.flat_bonus,
        crit_bonus: instruction.crit_bonus,
    });
    bus.push(MatchEvent::InstructionApplied {
        label: instruction.label.clone(),
        duration: instruction.duration,
    });
}

fn apply_scheduled_instructions(
    ctx: &mut MatchContext,
    config: &MatchConfig,
    games_completed: u8,
    bus: &mut EventBus,
) {
    for scheduled in &config.instructions {
        if scheduled.after_game == games_completed {
            issue_instruction(ctx, &scheduled.instruction, bus);
        }
    }
}

fn apply_coach_policies(
    ctx: &mut MatchContext,
    coaches: &[Option<&dyn CoachPolicy>; 2],
    bus: &mut EventBus,
) {
    for side in [Side::Home, Side::Away] {
        if ctx.active_instruction.is_some() {
            return;
        }
        if let Some(coach) = coaches[side.index()] {
            if let Some(instruction) = coach.decide_instruction(side, ctx) {
                issue_instruction(ctx, &instruction, bus);
            }
        }
    }
}
