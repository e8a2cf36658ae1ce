use crate::match_sim::state::{MatchContext, Side, SkillBreakdown};
use schema::{ShotCategory, Surface, Weather};

/// Environment adjustment for a (weather, surface, category) triple.
/// Weather and surface contributions compose multiplicatively; triples
/// without an entry are identity.
pub fn environment_multiplier(weather: Weather, surface: Surface, category: ShotCategory) -> f64 {
    weather_multiplier(weather, category) * surface_multiplier(surface, category)
}

fn weather_multiplier(weather: Weather, category: ShotCategory) -> f64 {
    use ShotCategory::*;

    match (weather, category) {
        // Wind punishes touch at the net and the ball toss
        (Weather::Windy, Net) => 0.9,
        (Weather::Windy, Serve) => 0.95,

        // Heat wears on the mind, humidity deadens long rallies
        (Weather::Hot, Composure) => 0.95,
        (Weather::Humid, Baseline) => 0.95,

        _ => 1.0,
    }
}

fn surface_multiplier(surface: Surface, category: ShotCategory) -> f64 {
    use ShotCategory::*;

    match (surface, category) {
        // Clay slows serves and rewards grinding
        (Surface::Clay, Baseline) => 1.1,
        (Surface::Clay, Serve) => 0.9,

        // Grass is the server's friend
        (Surface::Grass, Serve) => 1.1,
        (Surface::Grass, Net) => 1.05,
        (Surface::Grass, Baseline) => 0.9,

        // Indoor play takes the elements out of the serve
        (Surface::Indoor, Serve) => 1.05,

        _ => 1.0,
    }
}

/// Resolve one side's effective skill for a shot category.
///
/// Composition order is fixed: base rating, plus the pre-resolved flat
/// trait bonus, times the tactic, condition and environment multipliers,
/// then the active instruction override. The result is floored to an
/// integer and never negative. Reads the context only; no side effects.
pub fn resolve_effective_skill(
    ctx: &MatchContext,
    side: Side,
    category: ShotCategory,
) -> SkillBreakdown {
    let profile = ctx.competitor(side);

    let base = profile.rating(category);
    let trait_bonus = profile.bonus(category);
    let tactic_multiplier = ctx.tactic(side).multiplier(category);
    let condition_multiplier = profile.condition.multiplier();
    let environment = environment_multiplier(ctx.weather, ctx.surface, category);

    let mut value =
        (base + trait_bonus) as f64 * tactic_multiplier * condition_multiplier * environment;

    let mut instruction_applied = false;
    if let Some(instruction) = &ctx.active_instruction {
        if instruction.remaining_effect > 0 {
            value = value * instruction.skill_multiplier + instruction.flat_bonus as f64;
            instruction_applied = true;
        }
    }

    SkillBreakdown {
        base,
        trait_bonus,
        tactic_multiplier,
        condition_multiplier,
        environment_multiplier: environment,
        instruction_applied,
        final_value: (value.floor() as i32).max(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::match_sim::state::ActiveInstruction;
    use crate::profile::{CompetitorProfile, BASELINE_RATING};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{ConditionTier, Tactic};

    fn test_context(home: CompetitorProfile) -> MatchContext {
        MatchContext::new(
            "test",
            home,
            CompetitorProfile::new("Away", 50),
            &MatchConfig::default(),
        )
    }

    #[test]
    fn test_identity_modifiers_pass_base_through() {
        let ctx = test_context(CompetitorProfile::new("Home", 60));

        let breakdown = resolve_effective_skill(&ctx, Side::Home, ShotCategory::Baseline);

        assert_eq!(breakdown.base, 60);
        assert_eq!(breakdown.trait_bonus, 0);
        assert_eq!(breakdown.final_value, 60);
    }

    #[test]
    fn test_missing_rating_uses_baseline() {
        let mut profile = CompetitorProfile::new("Home", 60);
        profile.ratings[ShotCategory::Composure.index()] = -1;
        let ctx = test_context(profile);

        let breakdown = resolve_effective_skill(&ctx, Side::Home, ShotCategory::Composure);

        assert_eq!(breakdown.base, BASELINE_RATING);
    }

    #[rstest]
    #[case(Tactic::Aggressive, ShotCategory::Serve, 1.3)]
    #[case(Tactic::Aggressive, ShotCategory::Baseline, 0.8)]
    #[case(Tactic::Defensive, ShotCategory::Serve, 0.8)]
    #[case(Tactic::Defensive, ShotCategory::Return, 1.3)]
    #[case(Tactic::Balanced, ShotCategory::Net, 1.0)]
    #[case(Tactic::MindGame, ShotCategory::Composure, 1.3)]
    fn test_tactic_multiplier_is_applied(
        #[case] tactic: Tactic,
        #[case] category: ShotCategory,
        #[case] expected: f64,
    ) {
        let mut profile = CompetitorProfile::new("Home", 100);
        profile.tactic = tactic;
        let ctx = test_context(profile);

        let breakdown = resolve_effective_skill(&ctx, Side::Home, category);

        assert_eq!(breakdown.tactic_multiplier, expected);
        assert_eq!(breakdown.final_value, (100.0 * expected).floor() as i32);
    }

    #[test]
    fn test_composition_order_multiplies_after_flat_bonus() {
        let mut profile = CompetitorProfile::new("Home", 50);
        profile.bonuses[ShotCategory::Serve.index()] = 10;
        profile.tactic = Tactic::Aggressive;
        profile.condition = ConditionTier::Excellent;
        let ctx = test_context(profile);

        let breakdown = resolve_effective_skill(&ctx, Side::Home, ShotCategory::Serve);

        // (50 + 10) * 1.3 * 1.2 = 93.6, floored
        assert_eq!(breakdown.final_value, 93);
    }

    #[test]
    fn test_environment_table_defaults_to_identity() {
        assert_eq!(
            environment_multiplier(Weather::Clear, Surface::Hard, ShotCategory::Serve),
            1.0
        );
        assert_eq!(
            environment_multiplier(Weather::Windy, Surface::Hard, ShotCategory::Net),
            0.9
        );
        // Weather and surface compose
        assert_eq!(
            environment_multiplier(Weather::Windy, Surface::Grass, ShotCategory::Serve),
            0.95 * 1.1
        );
    }

    #[test]
    fn test_instruction_applies_only_while_effect_remains() {
        let mut ctx = test_context(CompetitorProfile::new("Home", 50));
        ctx.active_instruction = Some(ActiveInstruction {
            label: "all-out attack".to_string(),
            remaining_effect: 1,
            skill_multiplier: 1.2,
            flat_bonus: 5,
            crit_bonus: 0.0,
        });

        let boosted = resolve_effective_skill(&ctx, Side::Home, ShotCategory::Baseline);
        assert!(boosted.instruction_applied);
        assert_eq!(boosted.final_value, 65); // 50 * 1.2 + 5

        // Both sides get the same override
        let away = resolve_effective_skill(&ctx, Side::Away, ShotCategory::Baseline);
        assert!(away.instruction_applied);
        assert_eq!(away.final_value, 65);

        ctx.active_instruction.as_mut().unwrap().remaining_effect = 0;
        let expired = resolve_effective_skill(&ctx, Side::Home, ShotCategory::Baseline);
        assert!(!expired.instruction_applied);
        assert_eq!(expired.final_value, 50);
    }
}
