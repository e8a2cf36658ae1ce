use std::fmt;

/// Main error type for the match-point simulation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error related to competitor profile data
    Profile(ProfileDataError),
    /// Error related to match configuration data
    Config(ConfigError),
    /// Error raised while a simulation is running
    Simulation(SimulationError),
}

/// Errors related to competitor profile data operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileDataError {
    /// The profile document could not be read
    Io(String),
    /// The profile document could not be parsed
    Parse(String),
    /// The profile document parsed but carries unusable values
    Validation(String),
}

/// Errors related to match configuration documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config document could not be read
    Io(String),
    /// The config document could not be parsed
    Parse(String),
}

/// Which bounded loop hit its point ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivergenceScope {
    Game,
    Tiebreak,
}

/// Errors raised during simulation. Divergence is the only condition under
/// which the engine aborts a match instead of returning a SetResult.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The win-by-2 loop failed to terminate within the point ceiling
    Divergence {
        scope: DivergenceScope,
        points: u32,
        limit: u32,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Profile(err) => write!(f, "Profile data error: {}", err),
            EngineError::Config(err) => write!(f, "Config error: {}", err),
            EngineError::Simulation(err) => write!(f, "Simulation error: {}", err),
        }
    }
}

impl fmt::Display for ProfileDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileDataError::Io(details) => write!(f, "Failed to read profile: {}", details),
            ProfileDataError::Parse(details) => write!(f, "Malformed profile document: {}", details),
            ProfileDataError::Validation(details) => write!(f, "Invalid profile values: {}", details),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(details) => write!(f, "Failed to read config: {}", details),
            ConfigError::Parse(details) => write!(f, "Malformed config document: {}", details),
        }
    }
}

impl fmt::Display for DivergenceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivergenceScope::Game => write!(f, "game"),
            DivergenceScope::Tiebreak => write!(f, "tiebreak"),
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Divergence {
                scope,
                points,
                limit,
            } => write!(
                f,
                "Simulation diverged: {} reached {} points (limit {})",
                scope, points, limit
            ),
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for ProfileDataError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for SimulationError {}

impl From<ProfileDataError> for EngineError {
    fn from(err: ProfileDataError) -> Self {
        EngineError::Profile(err)
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::Config(err)
    }
}

impl From<SimulationError> for EngineError {
    fn from(err: SimulationError) -> Self {
        EngineError::Simulation(err)
    }
}

/// Result alias for engine-level operations
pub type SimResult<T> = Result<T, EngineError>;

/// Result alias for profile data operations
pub type ProfileDataResult<T> = Result<T, ProfileDataError>;

/// Result alias for config data operations
pub type ConfigResult<T> = Result<T, ConfigError>;
