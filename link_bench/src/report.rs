use std::fmt;

use crate::orchestrator::{ConnectionEstimate, SuiteReport};
use crate::statistics::TestResult;

const NAME_WIDTH: usize = 36;

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<NAME_WIDTH$} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3}  {}",
            self.name, self.min, self.avg, self.max, self.p99, self.p99_9, self.unit
        )
    }
}

impl fmt::Display for ConnectionEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.classification;
        let Some(profile) = c.matched_profile else {
            return write!(f, "Likely connection: unknown ({:.2} GB/s measured)", self.measured_gbps);
        };

        let marker = if c.is_realistic { "realistic" } else { "outside the realistic range" };
        write!(
            f,
            "Likely connection: {} ({:.2} GB/s measured, {:.1}% of {} GB/s theoretical, {marker})",
            profile.name, self.measured_gbps, c.percent_of_theoretical, profile.theoretical_gbps
        )
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run {} [{}] {}", self.run, self.source_label, self.device)?;
        writeln!(
            f,
            "{:<NAME_WIDTH$} {:>10} {:>10} {:>10} {:>10} {:>10}  Unit",
            "Test", "Min", "Avg", "Max", "p99", "p99.9"
        )?;
        for result in &self.results {
            writeln!(f, "{result}")?;
        }
        if let Some(connection) = &self.connection {
            writeln!(f, "{connection}")?;
        }
        if self.cancelled {
            writeln!(f, "Run cancelled; results are partial.")?;
        }
        Ok(())
    }
}
