// src/simulation/config.rs

use crate::error::ConfigError;

/// Minutes in one simulated operating day (12 hours).
pub const MINUTES_PER_DAY: u32 = 720;

/// People each line can serve in one minute.
pub const SERVICES_PER_MINUTE: usize = 2;

/// Trials run for every line count unless overridden.
pub const DEFAULT_TRIALS: usize = 50;

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Mean arrivals per minute.
    pub arrival_rate: f64,
    /// Line counts 1..=max_lines are evaluated.
    pub max_lines: usize,
    pub trials: usize,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub minutes_per_day: u32,
    pub services_per_minute: usize,
}

impl SimulationConfig {
    pub fn new(arrival_rate: f64, max_lines: usize) -> Self {
        Self {
            arrival_rate,
            max_lines,
            ..Self::default()
        }
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Written so NaN is rejected too.
        if !(self.arrival_rate > 0.0) {
            return Err(ConfigError::NonPositiveArrivalRate(self.arrival_rate));
        }
        if self.max_lines == 0 {
            return Err(ConfigError::NoLines);
        }
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        if self.minutes_per_day == 0 {
            return Err(ConfigError::EmptyDay);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            arrival_rate: 1.0,
            max_lines: 5,
            trials: DEFAULT_TRIALS,
            seed: None,
            minutes_per_day: MINUTES_PER_DAY,
            services_per_minute: SERVICES_PER_MINUTE,
        }
    }
}
