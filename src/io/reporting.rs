// src/io/reporting.rs

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::ReportError;
use crate::simulation::engine::{ConfigurationResult, SimulationReport};

/// Writes one CSV row per line-count configuration to `file_path`.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/rate_4.csv").
/// * `data` - The per-configuration results from a run.
pub fn write_results(file_path: &Path, data: &[ConfigurationResult]) -> Result<(), ReportError> {
    let file = std::fs::File::create(file_path)?;
    write_results_to(file, data)?;

    info!(rows = data.len(), path = %file_path.display(), "exported results");
    Ok(())
}

/// Same as [`write_results`] but into any writer.
pub fn write_results_to<W: Write>(writer: W, data: &[ConfigurationResult]) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in data {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Renders the console transcript: the arrival rate, then one line per
/// configuration.
pub fn format_transcript(report: &SimulationReport) -> String {
    let mut out = format!("Arrival rate: {}\n", report.arrival_rate);
    for result in &report.results {
        out.push_str(&format!(
            "Average time waited using {} queue(s): {}\n",
            result.lines, result.rounded_wait
        ));
    }
    out
}
