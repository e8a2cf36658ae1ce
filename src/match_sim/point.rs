use crate::match_sim::commands::MatchCommand;
use crate::match_sim::selector::select_category;
use crate::match_sim::skill::resolve_effective_skill;
use crate::match_sim::state::{MatchContext, MatchEvent, MatchRng, PointRecord, Side};
use crate::profile::TraitTrigger;
use schema::ShotCategory;

/// Every point starts from this critical-hit chance.
pub const BASE_CRIT_RATE: f64 = 0.05;

/// No resolved critical-hit probability may exceed this.
pub const CRIT_RATE_CAP: f64 = 0.35;

/// Per-level critical-hit chance above level 1.
pub const CRIT_RATE_PER_LEVEL: f64 = 0.005;

/// Pressure gained when a point lands as a critical hit.
pub const CRIT_PRESSURE_SPIKE: u8 = 10;

/// Resolve one point into a `PointRecord` plus the state changes it causes.
///
/// Pure with respect to the context: all mutation happens later via the
/// returned commands. Draw order is fixed - category selection, home
/// spread/steady rolls, away spread/steady rolls, critical check, passive
/// trait checks (winner's passive traits in order, until one fires), rally
/// length - and must not be reordered.
///
/// An exact tie of the two totals is broken by the raw spread outcomes;
/// a tie on those as well is awarded to the home side.
pub fn calculate_point_outcome(
    ctx: &MatchContext,
    point_index: usize,
    rng: &mut MatchRng,
) -> Vec<MatchCommand> {
    let category = select_category(ctx, rng);

    let skills = [
        resolve_effective_skill(ctx, Side::Home, category),
        resolve_effective_skill(ctx, Side::Away, category),
    ];

    // High pressure narrows the random spread: nervous play is flat play.
    let pressure_factor = (1.0 - ctx.pressure_level as f64 / 200.0).max(0.5);

    let mut rolls = [[0u8; 2]; 2];
    let mut totals = [0i32; 2];
    for side in [Side::Home, Side::Away] {
        let (spread_reason, steady_reason) = match side {
            Side::Home => ("Home Spread Roll", "Home Steady Roll"),
            Side::Away => ("Away Spread Roll", "Away Steady Roll"),
        };
        let spread = rng.next_outcome(spread_reason);
        let steady = rng.next_outcome(steady_reason);

        let roll = ((spread - 1) as f64 / 100.0 * 20.0 * pressure_factor).floor() as i32
            + ((steady - 1) as f64 / 100.0 * 10.0).floor() as i32;

        rolls[side.index()] = [spread, steady];
        totals[side.index()] = skills[side.index()].final_value + roll;
    }

    // Exact total ties fall back to the raw spread outcomes already drawn,
    // the home side taking a double tie. No extra draw is consumed, so the
    // draw order stays fixed.
    let winner = match totals[0].cmp(&totals[1]) {
        std::cmp::Ordering::Greater => Side::Home,
        std::cmp::Ordering::Less => Side::Away,
        std::cmp::Ordering::Equal => {
            if rolls[0][0] >= rolls[1][0] {
                Side::Home
            } else {
                Side::Away
            }
        }
    };
    let margin = (totals[0] - totals[1]).abs();

    let crit_rate = critical_rate(ctx, winner);
    let critical = rng.next_fraction("Critical Hit Check") < crit_rate;

    let triggered_trait = check_trait_trigger(ctx, winner, category, critical, rng);

    // Tight points run long; one draw of jitter on top.
    let rally_draw = rng.next_outcome("Rally Length");
    let rally_shots = (2 + (20 - margin.min(20)) / 4) as u8 + (rally_draw - 1) % 4;

    let record = PointRecord {
        index: point_index,
        category,
        skills,
        rolls,
        totals,
        winner,
        margin,
        critical,
        crit_rate,
        triggered_trait: triggered_trait.clone(),
        rally_shots,
        context: ctx.snapshot(),
    };

    let mut commands = vec![MatchCommand::EmitEvent(MatchEvent::PointResolved {
        point_index,
        winner,
        category,
        margin,
        rally_shots,
    })];
    if critical {
        commands.push(MatchCommand::EmitEvent(MatchEvent::CriticalHit { winner }));
        commands.push(MatchCommand::RaisePressure(CRIT_PRESSURE_SPIKE));
    }
    if let Some(trait_id) = triggered_trait {
        commands.push(MatchCommand::EmitEvent(MatchEvent::TraitTriggered {
            side: winner,
            trait_id,
        }));
    }
    commands.push(MatchCommand::RecordPoint(record));
    commands.push(MatchCommand::AwardGamePoint(winner));
    commands.push(MatchCommand::IncrementRally);
    commands.push(MatchCommand::DecayInstruction);

    commands
}

/// Resolved critical-hit probability for the side that won the point:
/// base rate, the winner's best trait bonus, level scaling, and any active
/// instruction bonus, capped at `CRIT_RATE_CAP`.
fn critical_rate(ctx: &MatchContext, winner: Side) -> f64 {
    let profile = ctx.competitor(winner);
    let mut rate = BASE_CRIT_RATE
        + profile.best_crit_bonus()
        + profile.level.saturating_sub(1) as f64 * CRIT_RATE_PER_LEVEL;

    if let Some(instruction) = &ctx.active_instruction {
        if instruction.remaining_effect > 0 {
            rate += instruction.crit_bonus;
        }
    }

    rate.min(CRIT_RATE_CAP)
}

/// First satisfied trigger rule on the winner's traits, if any.
/// No stacking: at most one trait fires per point.
fn check_trait_trigger(
    ctx: &MatchContext,
    winner: Side,
    category: ShotCategory,
    critical: bool,
    rng: &mut MatchRng,
) -> Option<String> {
    for kit in &ctx.competitor(winner).traits {
        let fired = match &kit.trigger {
            TraitTrigger::OnCategory(trigger_category) => *trigger_category == category,
            TraitTrigger::OnCriticalHit => critical,
            TraitTrigger::Passive { chance } => rng.next_fraction("Passive Trait Check") < *chance,
        };
        if fired {
            return Some(kit.id.clone());
        }
    }
    None
}
