use crate::profile::{CompetitorProfile, TraitKit, TraitTrigger};
use schema::{ConditionTier, ShotCategory, Tactic};
use serde::{Deserialize, Serialize};

/// A predefined competitor for demos and exhibition matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefabCompetitor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub profile: CompetitorProfile,
}

/// Get all available prefab competitors for exhibition matches
pub fn get_prefab_competitors() -> Vec<PrefabCompetitor> {
    vec![
        PrefabCompetitor {
            id: "kestrel".to_string(),
            name: "Mara Kestrel".to_string(),
            description: "Big-serving attacker who lives at the net and thrives on momentum"
                .to_string(),
            profile: CompetitorProfile {
                name: "Mara Kestrel".to_string(),
                level: 12,
                // serve, return, net, baseline, composure
                ratings: [78, 52, 74, 58, 60],
                bonuses: [4, 0, 3, 0, 0],
                condition: ConditionTier::Good,
                tactic: Tactic::ServeAndVolley,
                traits: vec![
                    TraitKit {
                        id: "cannon_serve".to_string(),
                        trigger: TraitTrigger::OnCategory(ShotCategory::Serve),
                        crit_bonus: 0.05,
                    },
                    TraitKit {
                        id: "showstopper".to_string(),
                        trigger: TraitTrigger::OnCriticalHit,
                        crit_bonus: 0.0,
                    },
                ],
            },
        },
        PrefabCompetitor {
            id: "okafor".to_string(),
            name: "Dele Okafor".to_string(),
            description: "Patient counterpuncher, near-impossible to hit through from the back"
                .to_string(),
            profile: CompetitorProfile {
                name: "Dele Okafor".to_string(),
                level: 11,
                ratings: [56, 75, 50, 79, 68],
                bonuses: [0, 3, 0, 5, 2],
                condition: ConditionTier::Normal,
                tactic: Tactic::Counterpunch,
                traits: vec![TraitKit {
                    id: "stone_wall".to_string(),
                    trigger: TraitTrigger::OnCategory(ShotCategory::Baseline),
                    crit_bonus: 0.02,
                }],
            },
        },
        PrefabCompetitor {
            id: "ivanova".to_string(),
            name: "Petra Ivanova".to_string(),
            description: "Ice-cold all-rounder who gets better as the scoreboard tightens"
                .to_string(),
            profile: CompetitorProfile {
                name: "Petra Ivanova".to_string(),
                level: 14,
                ratings: [64, 63, 60, 66, 82],
                bonuses: [0, 0, 0, 0, 6],
                condition: ConditionTier::Normal,
                tactic: Tactic::MindGame,
                traits: vec![TraitKit {
                    id: "clutch_nerves".to_string(),
                    trigger: TraitTrigger::Passive { chance: 0.12 },
                    crit_bonus: 0.04,
                }],
            },
        },
        PrefabCompetitor {
            id: "voss".to_string(),
            name: "Anton Voss".to_string(),
            description: "Raw junior talent with a heavy forehand and a hot head".to_string(),
            profile: CompetitorProfile {
                name: "Anton Voss".to_string(),
                level: 4,
                ratings: [61, 55, 48, 70, 41],
                bonuses: [0, 0, 0, 0, 0],
                condition: ConditionTier::Poor,
                tactic: Tactic::Aggressive,
                traits: vec![],
            },
        },
    ]
}

/// Look up a prefab competitor by its id
pub fn get_prefab_competitor(id: &str) -> Option<PrefabCompetitor> {
    get_prefab_competitors()
        .into_iter()
        .find(|prefab| prefab.id == id)
}
