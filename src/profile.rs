use crate::errors::{ProfileDataError, ProfileDataResult};
use schema::{ConditionTier, ShotCategory, Tactic, CATEGORY_COUNT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Documented fallback used when a category rating is missing or negative.
pub const BASELINE_RATING: i32 = 50;

/// Upper bound on the critical-hit chance a single trait may contribute.
/// Values above the cap are clamped at the boundary, not rejected.
pub const TRAIT_CRIT_BONUS_CAP: f64 = 0.15;

/// How a trait decides whether it fires on a won point.
/// Rules are evaluated in the order the traits are listed; the first
/// satisfied rule wins and at most one trait fires per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraitTrigger {
    /// Fires when the point was decided by the given category.
    OnCategory(ShotCategory),
    /// Fires when the point was a critical hit.
    OnCriticalHit,
    /// Fires on a random chance in [0, 1], checked once per won point.
    Passive { chance: f64 },
}

/// One active trait, already resolved to numbers by the roster systems.
/// The engine treats the identifier as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitKit {
    pub id: String,
    pub trigger: TraitTrigger,
    /// Additional critical-hit chance while this trait is equipped.
    pub crit_bonus: f64,
}

/// One side of a match: base ratings, condition, tactic, and the trait
/// bonuses the roster/equipment systems have already resolved to numbers.
///
/// `ratings` and `bonuses` are indexed by `ShotCategory::index()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorProfile {
    pub name: String,
    pub level: u8,
    /// Base rating per category. A negative entry means "unknown" and reads
    /// as `BASELINE_RATING`.
    pub ratings: [i32; CATEGORY_COUNT],
    /// Pre-resolved flat bonus per category. Zero when no trait applies.
    pub bonuses: [i32; CATEGORY_COUNT],
    pub condition: ConditionTier,
    pub tactic: Tactic,
    pub traits: Vec<TraitKit>,
}

impl CompetitorProfile {
    /// A level-1 competitor with flat ratings, no bonuses and no traits.
    pub fn new(name: &str, rating: i32) -> Self {
        Self {
            name: name.to_string(),
            level: 1,
            ratings: [rating; CATEGORY_COUNT],
            bonuses: [0; CATEGORY_COUNT],
            condition: ConditionTier::Normal,
            tactic: Tactic::Balanced,
            traits: Vec::new(),
        }
    }

    /// Base rating for a category, with the documented fallback applied.
    pub fn rating(&self, category: ShotCategory) -> i32 {
        let raw = self.ratings[category.index()];
        if raw < 0 {
            BASELINE_RATING
        } else {
            raw
        }
    }

    /// Flat trait/equipment bonus for a category.
    pub fn bonus(&self, category: ShotCategory) -> i32 {
        self.bonuses[category.index()]
    }

    /// Largest trait-sourced critical bonus on this profile.
    /// Already clamped by `sanitize`.
    pub fn best_crit_bonus(&self) -> f64 {
        self.traits
            .iter()
            .map(|kit| kit.crit_bonus)
            .fold(0.0, f64::max)
    }

    /// Repair out-of-range numbers handed over by the roster systems.
    /// Called by every loader. Bad values are clamped, never rejected.
    pub fn sanitize(&mut self) {
        if self.level == 0 {
            self.level = 1;
        }
        for kit in &mut self.traits {
            if !kit.crit_bonus.is_finite() {
                kit.crit_bonus = 0.0;
            }
            kit.crit_bonus = kit.crit_bonus.clamp(0.0, TRAIT_CRIT_BONUS_CAP);
            if let TraitTrigger::Passive { chance } = &mut kit.trigger {
                if !chance.is_finite() {
                    *chance = 0.0;
                }
                *chance = chance.clamp(0.0, 1.0);
            }
        }
    }

    /// Parse a single profile from a RON document.
    pub fn from_ron_str(source: &str) -> ProfileDataResult<Self> {
        let mut profile: CompetitorProfile =
            ron::from_str(source).map_err(|err| ProfileDataError::Parse(err.to_string()))?;
        if profile.name.is_empty() {
            return Err(ProfileDataError::Validation(
                "profile name must not be empty".to_string(),
            ));
        }
        profile.sanitize();
        Ok(profile)
    }

    /// Load a list of profiles from a RON file.
    pub fn load_all(path: &Path) -> ProfileDataResult<Vec<Self>> {
        let source =
            fs::read_to_string(path).map_err(|err| ProfileDataError::Io(err.to_string()))?;
        let mut profiles: Vec<CompetitorProfile> =
            ron::from_str(&source).map_err(|err| ProfileDataError::Parse(err.to_string()))?;
        for profile in &mut profiles {
            if profile.name.is_empty() {
                return Err(ProfileDataError::Validation(
                    "profile name must not be empty".to_string(),
                ));
            }
            profile.sanitize();
        }
        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_rating_falls_back_to_baseline() {
        let mut profile = CompetitorProfile::new("Test", 60);
        profile.ratings[ShotCategory::Net.index()] = -1;

        assert_eq!(profile.rating(ShotCategory::Net), BASELINE_RATING);
        assert_eq!(profile.rating(ShotCategory::Serve), 60);
    }

    #[test]
    fn test_sanitize_clamps_trait_numbers() {
        let mut profile = CompetitorProfile::new("Test", 50);
        profile.level = 0;
        profile.traits.push(TraitKit {
            id: "clutch_server".to_string(),
            trigger: TraitTrigger::Passive { chance: 3.0 },
            crit_bonus: 0.9,
        });

        profile.sanitize();

        assert_eq!(profile.level, 1);
        assert_eq!(profile.traits[0].crit_bonus, TRAIT_CRIT_BONUS_CAP);
        assert!(matches!(
            profile.traits[0].trigger,
            TraitTrigger::Passive { chance } if chance == 1.0
        ));
    }

    #[test]
    fn test_from_ron_str_roundtrip() {
        let profile = CompetitorProfile::new("Iva Barton", 55);
        let encoded = ron::to_string(&profile).expect("profile should serialize");

        let decoded = CompetitorProfile::from_ron_str(&encoded).expect("profile should parse");

        assert_eq!(decoded, profile);
    }

    #[test]
    fn test_from_ron_str_rejects_garbage() {
        let result = CompetitorProfile::from_ron_str("not a profile");
        assert!(matches!(result, Err(ProfileDataError::Parse(_))));
    }
}
