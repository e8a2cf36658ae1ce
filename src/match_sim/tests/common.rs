use crate::config::MatchConfig;
use crate::match_sim::state::MatchContext;
use crate::profile::{CompetitorProfile, TraitKit};
use schema::{ConditionTier, ShotCategory, Tactic, CATEGORY_COUNT};

/// A builder for creating test competitors with common defaults.
///
/// # Example
/// ```ignore
/// let profile = TestCompetitorBuilder::new("Mara", 60)
///     .with_tactic(Tactic::Aggressive)
///     .with_level(10)
///     .build();
/// ```
pub struct TestCompetitorBuilder {
    name: String,
    ratings: [i32; CATEGORY_COUNT],
    bonuses: [i32; CATEGORY_COUNT],
    level: u8,
    condition: ConditionTier,
    tactic: Tactic,
    traits: Vec<TraitKit>,
}

impl TestCompetitorBuilder {
    /// Creates a new builder with every rating set to `rating`.
    pub fn new(name: &str, rating: i32) -> Self {
        Self {
            name: name.to_string(),
            ratings: [rating; CATEGORY_COUNT],
            bonuses: [0; CATEGORY_COUNT],
            level: 1,
            condition: ConditionTier::Normal,
            tactic: Tactic::Balanced,
            traits: Vec::new(),
        }
    }

    pub fn with_rating(mut self, category: ShotCategory, rating: i32) -> Self {
        self.ratings[category.index()] = rating;
        self
    }

    pub fn with_bonus(mut self, category: ShotCategory, bonus: i32) -> Self {
        self.bonuses[category.index()] = bonus;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_condition(mut self, condition: ConditionTier) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_tactic(mut self, tactic: Tactic) -> Self {
        self.tactic = tactic;
        self
    }

    pub fn with_trait(mut self, kit: TraitKit) -> Self {
        self.traits.push(kit);
        self
    }

    /// Builds the `CompetitorProfile`.
    pub fn build(self) -> CompetitorProfile {
        let mut profile = CompetitorProfile {
            name: self.name,
            level: self.level,
            ratings: self.ratings,
            bonuses: self.bonuses,
            condition: self.condition,
            tactic: self.tactic,
            traits: self.traits,
        };
        profile.sanitize();
        profile
    }
}

/// Two flat-50 competitors on a neutral court.
pub fn create_test_context() -> MatchContext {
    MatchContext::new(
        "test_match",
        TestCompetitorBuilder::new("Home", 50).build(),
        TestCompetitorBuilder::new("Away", 50).build(),
        &MatchConfig::default(),
    )
}
