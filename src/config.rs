use crate::errors::{ConfigError, ConfigResult};
use schema::{Surface, Tactic, Weather};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound on the critical bonus an instruction may carry.
pub const INSTRUCTION_CRIT_BONUS_CAP: f64 = 0.35;

/// A caller-issued, time-limited tactical override. While active it is
/// applied identically to both sides of every point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub label: String,
    /// Number of points the instruction stays in effect.
    pub duration: u8,
    /// Multiplier applied to both resolved skill values.
    pub skill_multiplier: f64,
    /// Flat addition applied after the multiplier.
    pub flat_bonus: i32,
    /// Extra critical-hit chance while active.
    pub crit_bonus: f64,
    /// One-shot pressure drop applied at activation.
    pub pressure_relief: u8,
}

impl Instruction {
    /// Check the numbers an external caller handed over. A malformed
    /// instruction is ignored by the engine, never a hard error.
    pub fn validate(&self) -> Result<(), String> {
        if self.duration == 0 {
            return Err("instruction duration must be at least 1 point".to_string());
        }
        if !self.skill_multiplier.is_finite() || self.skill_multiplier <= 0.0 {
            return Err("instruction multiplier must be finite and positive".to_string());
        }
        if !self.crit_bonus.is_finite()
            || self.crit_bonus < 0.0
            || self.crit_bonus > INSTRUCTION_CRIT_BONUS_CAP
        {
            return Err(format!(
                "instruction crit bonus must be in [0, {}]",
                INSTRUCTION_CRIT_BONUS_CAP
            ));
        }
        Ok(())
    }
}

/// An instruction queued before the simulation starts, applied after the
/// given number of completed games (0 = before the first game).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledInstruction {
    pub after_game: u8,
    pub instruction: Instruction,
}

/// Per-match knobs handed over by the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub weather: Weather,
    pub surface: Surface,
    /// Starting pressure, clamped to 100 at the boundary.
    pub initial_pressure: u8,
    /// Optional tactic override per side; `None` uses the profile's tactic.
    pub tactic_overrides: [Option<Tactic>; 2],
    pub instructions: Vec<ScheduledInstruction>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weather: Weather::Clear,
            surface: Surface::Hard,
            initial_pressure: 0,
            tactic_overrides: [None, None],
            instructions: Vec::new(),
        }
    }
}

impl MatchConfig {
    pub fn new(weather: Weather, surface: Surface) -> Self {
        Self {
            weather,
            surface,
            ..Default::default()
        }
    }

    /// Parse a config from a RON document.
    pub fn from_ron_str(source: &str) -> ConfigResult<Self> {
        let mut config: MatchConfig =
            ron::from_str(source).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.initial_pressure = config.initial_pressure.min(100);
        Ok(config)
    }

    /// Load a config from a RON file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let source = fs::read_to_string(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        Self::from_ron_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boost() -> Instruction {
        Instruction {
            label: "all-out attack".to_string(),
            duration: 3,
            skill_multiplier: 1.15,
            flat_bonus: 0,
            crit_bonus: 0.05,
            pressure_relief: 0,
        }
    }

    #[test]
    fn test_validate_accepts_sane_instruction() {
        assert!(boost().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let mut instruction = boost();
        instruction.duration = 0;
        assert!(instruction.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nonsense_multiplier() {
        let mut instruction = boost();
        instruction.skill_multiplier = f64::NAN;
        assert!(instruction.validate().is_err());

        instruction.skill_multiplier = -2.0;
        assert!(instruction.validate().is_err());
    }

    #[test]
    fn test_from_ron_str_clamps_initial_pressure() {
        let config = MatchConfig {
            initial_pressure: 250,
            ..Default::default()
        };
        let encoded = ron::to_string(&config).expect("config should serialize");

        let decoded = MatchConfig::from_ron_str(&encoded).expect("config should parse");

        assert_eq!(decoded.initial_pressure, 100);
    }
}
