use clap::Parser;
use link_bench::BenchmarkConfig;
use utils::{normalized_path_from_user_string, ByteSize};

use crate::backends::BackendOptions;

/// Measures bandwidth and latency of the link between the host and an accelerator.
///
/// Defaults come from `LINKBENCH_*` environment variables; flags override them for this invocation.
#[derive(Parser, Debug)]
#[clap(name = "linkbench", version)]
pub struct LinkBenchCommand {
    /// Device backend to benchmark.
    #[clap(long, default_value = "host")]
    pub backend: String,

    /// Print the available backends and exit.
    #[clap(long)]
    pub list_backends: bool,

    /// Size of each bandwidth-test transfer, e.g. `256mib` or `64mb`.
    #[clap(long)]
    pub large_transfer: Option<ByteSize>,

    /// Size of each latency-test transfer.
    #[clap(long)]
    pub small_transfer: Option<ByteSize>,

    /// Number of empty submissions in the command latency test.
    #[clap(long)]
    pub command_iterations: Option<usize>,

    /// Number of transfers in each transfer latency test.
    #[clap(long)]
    pub transfer_iterations: Option<usize>,

    /// Copies submitted per timed bandwidth batch.
    #[clap(long)]
    pub copies_per_batch: Option<usize>,

    /// Timed batches per bandwidth test.
    #[clap(long)]
    pub batches: Option<usize>,

    /// Repeat the suite until cancelled.
    #[clap(long)]
    pub continuous: bool,

    /// Append results to this CSV file.
    #[clap(long, conflicts_with = "no_csv")]
    pub csv: Option<String>,

    /// Do not write a CSV result log.
    #[clap(long)]
    pub no_csv: bool,

    /// Print each suite report as one JSON line instead of a table.
    #[clap(long)]
    pub json: bool,

    /// Do not read the keyboard; the suite can then only be stopped by ending the process.
    #[clap(long)]
    pub no_interactive: bool,

    /// Link bandwidth of the simulated backend, in GB/s.
    #[clap(long, default_value_t = 12.0)]
    pub sim_bandwidth: f64,

    /// Per-submission latency of the simulated backend, in microseconds.
    #[clap(long, default_value_t = 5.0)]
    pub sim_latency_us: f64,
}

impl LinkBenchCommand {
    /// Overlay the flags that were given on `config`.
    pub fn apply_to(&self, config: &mut BenchmarkConfig) {
        if let Some(size) = self.large_transfer {
            config.large_transfer_bytes = size.as_u64();
        }
        if let Some(size) = self.small_transfer {
            config.small_transfer_bytes = size.as_u64();
        }
        if let Some(n) = self.command_iterations {
            config.command_latency_iterations = n;
        }
        if let Some(n) = self.transfer_iterations {
            config.transfer_latency_iterations = n;
        }
        if let Some(n) = self.copies_per_batch {
            config.copies_per_batch = n;
        }
        if let Some(n) = self.batches {
            config.bandwidth_batches = n;
        }
        if self.continuous {
            config.continuous_mode = true;
        }
        if let Some(path) = &self.csv {
            config.csv_logging_enabled = true;
            config.csv_path = normalized_path_from_user_string(path);
        }
        if self.no_csv {
            config.csv_logging_enabled = false;
        }
    }

    pub fn backend_options(&self) -> BackendOptions {
        BackendOptions {
            sim_bandwidth_gbps: self.sim_bandwidth,
            sim_latency_us: self.sim_latency_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> LinkBenchCommand {
        LinkBenchCommand::try_parse_from(std::iter::once("linkbench").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let command = parse(&[]);
        assert_eq!(command.backend, "host");
        assert!(!command.list_backends);

        let mut config = BenchmarkConfig::default();
        command.apply_to(&mut config);
        assert_eq!(config, BenchmarkConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let command = parse(&[
            "--backend",
            "simulated",
            "--large-transfer",
            "64mib",
            "--small-transfer",
            "4kb",
            "--command-iterations",
            "10",
            "--transfer-iterations",
            "20",
            "--copies-per-batch",
            "2",
            "--batches",
            "8",
            "--continuous",
            "--no-csv",
        ]);
        assert_eq!(command.backend, "simulated");

        let mut config = BenchmarkConfig::default();
        command.apply_to(&mut config);
        assert_eq!(config.large_transfer_bytes, 64 << 20);
        assert_eq!(config.small_transfer_bytes, 4000);
        assert_eq!(config.command_latency_iterations, 10);
        assert_eq!(config.transfer_latency_iterations, 20);
        assert_eq!(config.copies_per_batch, 2);
        assert_eq!(config.bandwidth_batches, 8);
        assert!(config.continuous_mode);
        assert!(!config.csv_logging_enabled);
    }

    #[test]
    fn test_csv_path_enables_logging() {
        let command = parse(&["--csv", "out/results.csv"]);
        let mut config = BenchmarkConfig::default();
        config.csv_logging_enabled = false;
        command.apply_to(&mut config);
        assert!(config.csv_logging_enabled);
        assert!(config.csv_path.is_absolute());
        assert!(config.csv_path.ends_with("out/results.csv"));
    }

    #[test]
    fn test_rejected_arguments() {
        let args = |a: &[&str]| LinkBenchCommand::try_parse_from(std::iter::once("linkbench").chain(a.iter().copied()));
        assert!(args(&["--csv", "a.csv", "--no-csv"]).is_err());
        assert!(args(&["--large-transfer", "12 parsecs"]).is_err());
        assert!(args(&["--batches", "-1"]).is_err());
    }

    #[test]
    fn test_simulated_backend_options() {
        let options = parse(&["--sim-bandwidth", "3.5", "--sim-latency-us", "0"]).backend_options();
        assert_eq!(options.sim_bandwidth_gbps, 3.5);
        assert_eq!(options.sim_latency_us, 0.0);
    }
}
