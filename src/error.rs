//! Error types for configuring and reporting a wait-time run

use thiserror::Error;

/// A configuration the simulation cannot run with.
///
/// The engine assumes a valid configuration; callers check it with
/// [`SimulationConfig::validate`](crate::simulation::config::SimulationConfig::validate)
/// before starting a run.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("arrival rate must be a positive number, got {0}")]
    NonPositiveArrivalRate(f64),

    #[error("at least one service line is required")]
    NoLines,

    #[error("at least one trial per configuration is required")]
    NoTrials,

    #[error("the operating day must last at least one minute")]
    EmptyDay,
}

/// Failures while exporting results.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
