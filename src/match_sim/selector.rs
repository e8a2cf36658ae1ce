use crate::match_sim::state::{MatchContext, MatchRng, Side};
use schema::{ShotCategory, StyleClass, CATEGORY_COUNT};

/// Base selection weights in category table order
/// (serve, return, net, baseline, composure).
const BASE_WEIGHTS: [f64; CATEGORY_COUNT] = [0.20, 0.20, 0.15, 0.30, 0.15];

/// Pressure above this level pushes points onto composure.
const PRESSURE_WEIGHT_THRESHOLD: u8 = 70;

/// Pick the shot category that decides the current point.
///
/// Weights are shifted by the two tactics and by high pressure and are
/// deliberately left unnormalized afterwards; the cumulative walk only
/// cares about relative magnitude. A draw past the total falls back to
/// baseline play.
pub fn select_category(ctx: &MatchContext, rng: &mut MatchRng) -> ShotCategory {
    let weights = category_weights(ctx);
    let draw = rng.next_fraction("Shot Category Selection");

    let mut cumulative = 0.0;
    for category in ShotCategory::all() {
        cumulative += weights[category.index()];
        if draw <= cumulative {
            return category;
        }
    }
    ShotCategory::Baseline
}

/// Adjusted (unnormalized) selection weights for the current context.
pub fn category_weights(ctx: &MatchContext) -> [f64; CATEGORY_COUNT] {
    use ShotCategory::*;

    let mut weights = BASE_WEIGHTS;
    let classes = [
        ctx.tactic(Side::Home).style_class(),
        ctx.tactic(Side::Away).style_class(),
    ];

    if classes.contains(&StyleClass::Offensive) {
        weights[Serve.index()] += 0.10;
        weights[Net.index()] += 0.10;
        weights[Return.index()] -= 0.10;
        weights[Baseline.index()] -= 0.10;
    }
    if classes.contains(&StyleClass::Defensive) {
        weights[Serve.index()] -= 0.10;
        weights[Net.index()] -= 0.10;
        weights[Return.index()] += 0.10;
        weights[Baseline.index()] += 0.10;
    }
    if ctx.pressure_level > PRESSURE_WEIGHT_THRESHOLD {
        weights[Composure.index()] += 0.15;
        weights[Serve.index()] -= 0.05;
        weights[Net.index()] -= 0.05;
        weights[Baseline.index()] -= 0.05;
    }

    weights
}
