// src/simulation/engine.rs

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::io::arrivals::sample_arrivals;
use crate::model::queues::LinkedQueue;
use crate::model::traits::Queue;
use crate::simulation::config::SimulationConfig;

// Serialize so it can be written straight to CSV.
/// Outcome of every trial for one line count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationResult {
    pub lines: usize,
    /// Per-line average wait, averaged across lines.
    pub average_wait: f64,
    /// `average_wait` rounded up to whole minutes.
    pub rounded_wait: u64,
    pub people_served: u64,
    pub total_wait_minutes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub arrival_rate: f64,
    pub results: Vec<ConfigurationResult>,
}

impl SimulationReport {
    /// Line count to rounded average wait.
    pub fn as_map(&self) -> BTreeMap<usize, u64> {
        self.results
            .iter()
            .map(|result| (result.lines, result.rounded_wait))
            .collect()
    }
}

/// Per-line totals, accumulated across all trials of one configuration.
#[derive(Debug, Clone)]
struct LineStats {
    people_served: Vec<u64>,
    total_wait_minutes: Vec<u64>,
}

impl LineStats {
    fn new(lines: usize) -> Self {
        Self {
            people_served: vec![0; lines],
            total_wait_minutes: vec![0; lines],
        }
    }

    fn record(&mut self, line: usize, wait: u32) {
        self.people_served[line] += 1;
        self.total_wait_minutes[line] += u64::from(wait);
    }

    fn summarize(&self) -> ConfigurationResult {
        let lines = self.people_served.len();

        // A line nobody used contributes a zero average.
        let sum_of_averages: f64 = self
            .people_served
            .iter()
            .zip(&self.total_wait_minutes)
            .map(|(&served, &waited)| {
                if served == 0 {
                    0.0
                } else {
                    waited as f64 / served as f64
                }
            })
            .sum();
        let average_wait = if lines == 0 {
            0.0
        } else {
            sum_of_averages / lines as f64
        };

        ConfigurationResult {
            lines,
            average_wait,
            rounded_wait: average_wait.ceil() as u64,
            people_served: self.people_served.iter().sum(),
            total_wait_minutes: self.total_wait_minutes.iter().sum(),
        }
    }
}

/// Index of the strictly shortest line; ties go to the earliest index.
/// Returns `None` when there are no lines.
pub fn shortest_line<I>(lengths: I) -> Option<usize>
where
    I: IntoIterator<Item = usize>,
{
    let mut best: Option<(usize, usize)> = None;
    for (index, len) in lengths.into_iter().enumerate() {
        match best {
            Some((_, best_len)) if len >= best_len => {}
            _ => best = Some((index, len)),
        }
    }
    best.map(|(index, _)| index)
}

/// Estimates average customer wait for each number of open lines.
///
/// The random source is owned by the session and consumed tick by tick, then
/// arrival by arrival, so a seeded run always reproduces the same report.
pub struct WaitSimulation<R = ChaCha8Rng> {
    config: SimulationConfig,
    rng: R,
}

impl WaitSimulation<ChaCha8Rng> {
    /// Seeds from `config.seed`, or from entropy when no seed is set.
    pub fn new(config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { config, rng }
    }
}

impl<R: Rng> WaitSimulation<R> {
    pub fn with_rng(config: SimulationConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Evaluates every line count from 1 to `max_lines`, each from fresh totals.
    pub fn run(&mut self) -> SimulationReport {
        info!(
            arrival_rate = self.config.arrival_rate,
            max_lines = self.config.max_lines,
            trials = self.config.trials,
            "starting wait-time simulation"
        );

        let results = (1..=self.config.max_lines)
            .map(|lines| self.run_configuration(lines))
            .collect();

        SimulationReport {
            arrival_rate: self.config.arrival_rate,
            results,
        }
    }

    /// Runs all trials for a single line count and folds them into one result.
    pub fn run_configuration(&mut self, lines: usize) -> ConfigurationResult {
        let mut stats = LineStats::new(lines);

        for trial in 0..self.config.trials {
            self.run_trial(&mut stats);
            debug!(
                lines,
                trial,
                served = stats.people_served.iter().sum::<u64>(),
                "trial complete"
            );
        }

        let result = stats.summarize();
        info!(
            lines,
            average_wait = result.average_wait,
            rounded_wait = result.rounded_wait,
            "configuration complete"
        );
        result
    }

    fn run_trial(&mut self, stats: &mut LineStats) {
        let mut queues: Vec<LinkedQueue<u32>> = (0..stats.people_served.len())
            .map(|_| LinkedQueue::new())
            .collect();

        for minute in 0..self.config.minutes_per_day {
            let arrivals = sample_arrivals(&mut self.rng, self.config.arrival_rate);

            for _ in 0..arrivals {
                let Some(line) = shortest_line(queues.iter().map(|queue| queue.len())) else {
                    break;
                };
                trace!(minute, line, "routing arrival");
                queues[line].offer(minute);
            }

            // Every service re-checks the line, so a line with one person
            // serves exactly one.
            for (line, queue) in queues.iter_mut().enumerate() {
                for _ in 0..self.config.services_per_minute {
                    if let Some(arrived) = queue.poll() {
                        stats.record(line, minute - arrived);
                    }
                }
            }
        }
    }
}
