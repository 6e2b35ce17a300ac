//! Utility functions and structures for reporting search results.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use itertools::Itertools;
use serde::Serialize;

use crate::archive::Archive;
use crate::error::Result;
use crate::problem::Problem;
use crate::selector::OperatorWeight;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Render the archive as a table, one row per member.
pub fn format_archive(archive: &Archive) -> String {
    let mut out = format!(
        "{:>4} {:>12} {:>10} {:>9}  {}\n",
        "#", "Cost", "Time", "Vehicles", "Second-echelon routes"
    );
    out.push_str(&format!("{:-<80}\n", ""));

    for (i, entry) in archive.iter().enumerate() {
        out.push_str(&format!(
            "{:>4} {:>12.2} {:>10.2} {:>9}  {}\n",
            i + 1,
            entry.objectives.cost,
            entry.objectives.time,
            entry.objectives.vehicles,
            entry.solution.second_echelon.iter().join(" ")
        ));
    }

    out
}

/// Save the archive as a readable text report.
pub fn save_archive<P: AsRef<Path>>(archive: &Archive, problem: &Problem, path: P) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "Pareto archive for instance: {}", problem.name)?;
    writeln!(file, "Members: {}", archive.len())?;
    writeln!(file)?;

    for (i, entry) in archive.iter().enumerate() {
        writeln!(file, "Solution #{}: {}", i + 1, entry.objectives)?;
        for route in &entry.solution.first_echelon {
            writeln!(file, "  truck:   {}", route)?;
        }
        for route in &entry.solution.second_echelon {
            writeln!(file, "  vehicle: {}", route)?;
        }
        writeln!(file)?;
    }

    Ok(())
}

/// Write the archive as JSON for downstream tools.
pub fn write_archive_json<P: AsRef<Path>>(archive: &Archive, path: P) -> Result<()> {
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, archive.entries())?;
    Ok(())
}

/// Statistics about a search run.
#[derive(Debug, Clone, Serialize)]
pub struct SearchStatistics {
    pub iterations: usize,
    pub runtime: Duration,
    pub candidates: usize,
    pub feasible_candidates: usize,
    pub admissions: usize,
    pub archive_size: usize,
    pub operators: Vec<OperatorWeight>,
}

impl SearchStatistics {
    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        let mut out = format!(
            "Search Statistics:
- Iterations: {}
- Runtime: {}
- Candidates: {}
- Feasible Candidates: {}
- Archive Admissions: {}
- Final Archive Size: {}",
            self.iterations,
            format_duration(self.runtime),
            self.candidates,
            self.feasible_candidates,
            self.admissions,
            self.archive_size
        );

        for op in &self.operators {
            out.push_str(&format!(
                "\n- Operator {}: weight {:.3}, applied {}, admitted {}",
                op.operator, op.weight, op.applications, op.admissions
            ));
        }

        out
    }
}
