use crate::match_sim::state::{MatchStatistics, PointRecord, SetResult, Side, TurningPoint};

/// Accumulates the set-level outputs while points are resolved: the point
/// log, per-side statistics, and flagged turning points. All counters are
/// monotonic; nothing is ever removed.
#[derive(Debug, Default)]
pub struct SetLedger {
    pub log: Vec<PointRecord>,
    pub stats: [MatchStatistics; 2],
    pub turning_points: Vec<TurningPoint>,
}

impl SetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one resolved point into the running totals.
    pub fn record_point(&mut self, record: PointRecord) {
        let stats = &mut self.stats[record.winner.index()];
        stats.total_points_won += 1;
        stats.points_won_by_category[record.category.index()] += 1;
        if record.context.in_tiebreak {
            stats.tiebreak_points_won += 1;
        }
        if record.critical {
            stats.critical_hits += 1;
        }
        if record.triggered_trait.is_some() {
            stats.trait_triggers += 1;
        }
        if record.rally_shots > stats.longest_rally {
            stats.longest_rally = record.rally_shots;
        }

        if let Some(turning_point) = flag_turning_point(&record) {
            self.turning_points.push(turning_point);
        }
        self.log.push(record);
    }

    pub fn record_game_won(&mut self, side: Side) {
        self.stats[side.index()].games_won += 1;
    }

    /// Finish the set and hand the accumulated outputs over.
    pub fn into_result(self, match_id: &str, set_score: [u8; 2], winner: Side) -> SetResult {
        SetResult {
            match_id: match_id.to_string(),
            set_score,
            winner,
            log: self.log,
            stats: self.stats,
            turning_points: self.turning_points,
        }
    }
}

/// A point is pivotal when the game was already competitive (both sides at
/// 3+ points), the point was a critical hit, or a trait fired.
fn flag_turning_point(record: &PointRecord) -> Option<TurningPoint> {
    let competitive_game = record.context.game_score[0] >= 3 && record.context.game_score[1] >= 3;
    let trait_triggered = record.triggered_trait.is_some();

    if !(competitive_game || record.critical || trait_triggered) {
        return None;
    }

    let importance =
        (record.context.pressure_level / 10 + if record.critical { 3 } else { 0 }).min(10);

    Some(TurningPoint {
        point_index: record.index,
        importance,
        critical: record.critical,
        trait_triggered,
        competitive_game,
    })
}
