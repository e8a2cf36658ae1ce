#[cfg(test)]
mod tests {
    use crate::config::MatchConfig;
    use crate::match_sim::engine::simulate_set;
    use crate::match_sim::point::CRIT_RATE_CAP;
    use crate::match_sim::state::{MatchRng, SetResult, Side};
    use crate::match_sim::tests::common::TestCompetitorBuilder;
    use crate::profile::{TraitKit, TraitTrigger};
    use schema::{ShotCategory, Tactic};

    /// A mixed bag of matchups, simulated over a spread of seeds.
    fn simulate_batch() -> Vec<SetResult> {
        let matchups = [
            (55, Tactic::Balanced, 55, Tactic::Balanced),
            (70, Tactic::Aggressive, 50, Tactic::Defensive),
            (48, Tactic::ServeAndVolley, 66, Tactic::MindGame),
        ];

        let mut results = Vec::new();
        for (index, (home_rating, home_tactic, away_rating, away_tactic)) in
            matchups.iter().enumerate()
        {
            for seed in 0..40 {
                let home = TestCompetitorBuilder::new("Home", *home_rating)
                    .with_tactic(*home_tactic)
                    .with_level(10)
                    .with_trait(TraitKit {
                        id: "clutch_nerves".to_string(),
                        trigger: TraitTrigger::Passive { chance: 0.1 },
                        crit_bonus: 0.05,
                    })
                    .build();
                let away = TestCompetitorBuilder::new("Away", *away_rating)
                    .with_tactic(*away_tactic)
                    .with_trait(TraitKit {
                        id: "stone_wall".to_string(),
                        trigger: TraitTrigger::OnCategory(ShotCategory::Baseline),
                        crit_bonus: 0.0,
                    })
                    .build();

                let mut rng = MatchRng::from_seed(seed + index as u64 * 1000);
                let (result, _) =
                    simulate_set("batch", home, away, &MatchConfig::default(), &mut rng)
                        .expect("set should complete");
                results.push(result);
            }
        }
        results
    }

    #[test]
    fn test_pressure_stays_in_bounds_on_every_record() {
        for result in simulate_batch() {
            for record in &result.log {
                assert!(record.context.pressure_level <= 100);
            }
        }
    }

    #[test]
    fn test_crit_rate_never_exceeds_cap() {
        for result in simulate_batch() {
            for record in &result.log {
                assert!(
                    record.crit_rate <= CRIT_RATE_CAP,
                    "point {} resolved a crit rate of {}",
                    record.index,
                    record.crit_rate
                );
            }
        }
    }

    #[test]
    fn test_statistics_conservation() {
        for result in simulate_batch() {
            let total =
                result.stats[0].total_points_won + result.stats[1].total_points_won;
            assert_eq!(total as usize, result.log.len());

            // Category totals add back up to the points won
            for side in [Side::Home, Side::Away] {
                let stats = &result.stats[side.index()];
                let by_category: u32 = stats.points_won_by_category.iter().sum();
                assert_eq!(by_category, stats.total_points_won);
            }
        }
    }

    #[test]
    fn test_set_score_is_a_legal_final_score() {
        for result in simulate_batch() {
            let [home_games, away_games] = result.set_score;
            let (winner_games, loser_games) = if result.winner == Side::Home {
                (home_games, away_games)
            } else {
                (away_games, home_games)
            };

            let normal_win = winner_games == 6 && winner_games - loser_games >= 2;
            let extended_win = winner_games == 7 && (loser_games == 5 || loser_games == 6);
            assert!(
                normal_win || extended_win,
                "illegal final score {:?}",
                result.set_score
            );
        }
    }

    #[test]
    fn test_games_won_matches_set_score() {
        for result in simulate_batch() {
            assert_eq!(result.stats[0].games_won, result.set_score[0] as u32);
            assert_eq!(result.stats[1].games_won, result.set_score[1] as u32);
        }
    }

    #[test]
    fn test_rally_count_equals_points_played() {
        for result in simulate_batch() {
            if let Some(last) = result.log.last() {
                // The snapshot is taken before the rally counter ticks,
                // so the last record has seen every point but its own.
                assert_eq!(last.context.rally_count as usize, result.log.len() - 1);
            }
        }
    }

    #[test]
    fn test_turning_points_reference_real_log_entries() {
        for result in simulate_batch() {
            for turning_point in &result.turning_points {
                assert!(turning_point.point_index < result.log.len());
                assert!(turning_point.importance <= 10);

                let record = &result.log[turning_point.point_index];
                assert!(
                    turning_point.critical == record.critical
                        && turning_point.trait_triggered == record.triggered_trait.is_some()
                );
            }
        }
    }
}
