use crate::config::MatchConfig;
use crate::errors::SimResult;
use crate::match_sim::coach::CoachPolicy;
use crate::match_sim::engine::simulate_set_with_coaches;
use crate::match_sim::state::{MatchEvent, MatchRng, SetResult, Side};
use crate::profile::CompetitorProfile;

/// High-level match management interface that abstracts the engine entry
/// points. Owns the inputs, runs the simulation once, and keeps the result
/// and event stream around for queries and replay.
pub struct MatchRunner {
    match_id: String,
    home: CompetitorProfile,
    away: CompetitorProfile,
    config: MatchConfig,
    seed: u64,
    coaches: [Option<Box<dyn CoachPolicy>>; 2],
    result: Option<SetResult>,
    events: Vec<MatchEvent>,
}

/// Information about the current state of a runner for API queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetInfo {
    pub match_id: String,
    pub finished: bool,
    pub set_score: [u8; 2],
    pub winner: Option<Side>,
    pub points_played: usize,
    pub turning_points: usize,
}

impl MatchRunner {
    /// Create a runner with a fixed default seed; use `with_seed` for
    /// anything beyond a smoke run.
    pub fn new(
        match_id: &str,
        home: CompetitorProfile,
        away: CompetitorProfile,
        config: MatchConfig,
    ) -> Self {
        Self {
            match_id: match_id.to_string(),
            home,
            away,
            config,
            seed: 0,
            coaches: [None, None],
            result: None,
            events: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_coach(mut self, side: Side, coach: Box<dyn CoachPolicy>) -> Self {
        self.coaches[side.index()] = Some(coach);
        self
    }

    /// Run the set to completion. Re-running with the same runner replays
    /// the identical match (same seed, same inputs).
    pub fn run(&mut self) -> SimResult<SetResult> {
        let mut rng = MatchRng::from_seed(self.seed);
        let coaches = [self.coaches[0].as_deref(), self.coaches[1].as_deref()];

        let (result, bus) = simulate_set_with_coaches(
            &self.match_id,
            self.home.clone(),
            self.away.clone(),
            &self.config,
            coaches,
            &mut rng,
        )?;

        self.events = bus.events().to_vec();
        self.result = Some(result.clone());
        Ok(result)
    }

    pub fn result(&self) -> Option<&SetResult> {
        self.result.as_ref()
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn names(&self) -> [&str; 2] {
        [&self.home.name, &self.away.name]
    }

    /// Get current information about the runner for API queries
    pub fn set_info(&self) -> SetInfo {
        match &self.result {
            Some(result) => SetInfo {
                match_id: self.match_id.clone(),
                finished: true,
                set_score: result.set_score,
                winner: Some(result.winner),
                points_played: result.log.len(),
                turning_points: result.turning_points.len(),
            },
            None => SetInfo {
                match_id: self.match_id.clone(),
                finished: false,
                set_score: [0, 0],
                winner: None,
                points_played: 0,
                turning_points: 0,
            },
        }
    }

    /// Print the formatted narrative of the last run, one line per event.
    /// Silent events are skipped.
    pub fn print_transcript(&self) {
        let names = self.names();
        for event in &self.events {
            if let Some(line) = event.format(names) {
                println!("{}", line);
            }
        }
    }
}
