use std::path::PathBuf;

use bench_config::BenchConfig;
use utils::normalized_path_from_user_string;

use crate::classifier::RealisticRange;
use crate::error::{LinkBenchError, Result};

/// Parameters of one benchmark suite run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    pub large_transfer_bytes: u64,
    pub small_transfer_bytes: u64,
    pub command_latency_iterations: usize,
    pub transfer_latency_iterations: usize,
    pub copies_per_batch: usize,
    pub bandwidth_batches: usize,
    pub continuous_mode: bool,
    pub csv_logging_enabled: bool,
    pub csv_path: PathBuf,
    pub realistic_range: RealisticRange,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::from(&BenchConfig::default())
    }
}

impl From<&BenchConfig> for BenchmarkConfig {
    fn from(config: &BenchConfig) -> Self {
        let benchmark = &config.benchmark;
        Self {
            large_transfer_bytes: benchmark.large_transfer_bytes.as_u64(),
            small_transfer_bytes: benchmark.small_transfer_bytes.as_u64(),
            command_latency_iterations: benchmark.command_latency_iterations,
            transfer_latency_iterations: benchmark.transfer_latency_iterations,
            copies_per_batch: benchmark.copies_per_batch,
            bandwidth_batches: benchmark.bandwidth_batches,
            continuous_mode: benchmark.continuous_mode,
            csv_logging_enabled: config.result_log.csv_logging_enabled,
            csv_path: normalized_path_from_user_string(&config.result_log.csv_path),
            realistic_range: RealisticRange::new(
                config.classifier.realistic_min_percent,
                config.classifier.realistic_max_percent,
            ),
        }
    }
}

impl BenchmarkConfig {
    /// Bytes moved by one timed bandwidth batch.
    pub fn bytes_per_batch(&self) -> u64 {
        self.large_transfer_bytes.saturating_mul(self.copies_per_batch as u64)
    }

    pub fn validate(&self) -> Result<()> {
        let counts = [
            ("command_latency_iterations", self.command_latency_iterations),
            ("transfer_latency_iterations", self.transfer_latency_iterations),
            ("copies_per_batch", self.copies_per_batch),
            ("bandwidth_batches", self.bandwidth_batches),
        ];
        if let Some((name, _)) = counts.iter().find(|(_, v)| *v == 0) {
            return Err(LinkBenchError::invalid_input(format!("{name} must be at least 1")));
        }

        if self.large_transfer_bytes == 0 || self.small_transfer_bytes == 0 {
            return Err(LinkBenchError::invalid_input("transfer sizes must be at least 1 byte"));
        }

        let RealisticRange {
            min_percent,
            max_percent,
        } = self.realistic_range;
        if !(min_percent.is_finite() && max_percent.is_finite()) || min_percent < 0.0 || min_percent > max_percent {
            return Err(LinkBenchError::invalid_input(format!(
                "realistic range [{min_percent}, {max_percent}] must satisfy 0 <= min <= max"
            )));
        }

        if self.csv_logging_enabled && self.csv_path.as_os_str().is_empty() {
            return Err(LinkBenchError::invalid_input("csv logging is enabled but no csv path is set"));
        }

        Ok(())
    }
}
