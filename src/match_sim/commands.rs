use crate::match_sim::aggregator::SetLedger;
use crate::match_sim::state::{
    ActiveInstruction, EventBus, MatchContext, MatchEvent, PointRecord, Side,
};

/// Atomic state changes produced by point resolution. Executing them
/// centrally keeps the resolver pure and its side effects auditable.
#[derive(Debug, Clone)]
pub enum MatchCommand {
    /// Append a resolved point to the ledger (log, statistics, turning points).
    RecordPoint(PointRecord),
    /// Credit the point to a side on the current game or tiebreak score.
    AwardGamePoint(Side),
    IncrementRally,
    RaisePressure(u8),
    ReducePressure(u8),
    /// Tick the active instruction down one point, clearing it at zero.
    DecayInstruction,
    ActivateInstruction(ActiveInstruction),
    EmitEvent(MatchEvent),
}

pub fn execute_command_batch(
    commands: Vec<MatchCommand>,
    ctx: &mut MatchContext,
    ledger: &mut SetLedger,
    bus: &mut EventBus,
) {
    for command in commands {
        execute_command(command, ctx, ledger, bus);
    }
}

fn execute_command(
    command: MatchCommand,
    ctx: &mut MatchContext,
    ledger: &mut SetLedger,
    bus: &mut EventBus,
) {
    match command {
        MatchCommand::RecordPoint(record) => ledger.record_point(record),
        MatchCommand::AwardGamePoint(side) => {
            if ctx.in_tiebreak {
                ctx.tiebreak_score[side.index()] += 1;
            } else {
                ctx.game_score[side.index()] += 1;
            }
        }
        MatchCommand::IncrementRally => ctx.rally_count += 1,
        MatchCommand::RaisePressure(amount) => ctx.raise_pressure(amount),
        MatchCommand::ReducePressure(amount) => ctx.reduce_pressure(amount),
        MatchCommand::DecayInstruction => {
            let mut expired = None;
            if let Some(instruction) = &mut ctx.active_instruction {
                instruction.remaining_effect = instruction.remaining_effect.saturating_sub(1);
                if instruction.remaining_effect == 0 {
                    expired = Some(instruction.label.clone());
                }
            }
            if let Some(label) = expired {
                ctx.active_instruction = None;
                bus.push(MatchEvent::InstructionExpired { label });
            }
        }
        MatchCommand::ActivateInstruction(instruction) => {
            ctx.active_instruction = Some(instruction);
        }
        MatchCommand::EmitEvent(event) => bus.push(event),
    }
}
