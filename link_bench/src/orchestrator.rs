use error_printer::ErrorPrinter;
use serde::Serialize;
use tracing::{debug, info};

use crate::cancellation::CancellationSignal;
use crate::classifier::{ClassificationResult, InterfaceClassifier};
use crate::config::BenchmarkConfig;
use crate::error::{OperationError, Result};
use crate::harness::{Measurement, TestHarness, TestPlan};
use crate::operation::{Backend, HardwareOperation, TransferDirection};
use crate::progress::ProgressReporter;
use crate::result_log::ResultLogger;
use crate::statistics::{summarize, TestResult};

/// The five tests of a benchmark suite, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuiteTest {
    UploadBandwidth,
    DownloadBandwidth,
    CommandLatency,
    UploadLatency,
    DownloadLatency,
}

impl SuiteTest {
    pub const ALL: [SuiteTest; 5] = [
        SuiteTest::UploadBandwidth,
        SuiteTest::DownloadBandwidth,
        SuiteTest::CommandLatency,
        SuiteTest::UploadLatency,
        SuiteTest::DownloadLatency,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SuiteTest::UploadBandwidth => "Upload Bandwidth (Host to Device)",
            SuiteTest::DownloadBandwidth => "Download Bandwidth (Device to Host)",
            SuiteTest::CommandLatency => "Command Latency",
            SuiteTest::UploadLatency => "Upload Latency (Host to Device)",
            SuiteTest::DownloadLatency => "Download Latency (Device to Host)",
        }
    }

    fn plan(&self, config: &BenchmarkConfig) -> TestPlan {
        let (repetitions, measurement) = match self {
            SuiteTest::UploadBandwidth | SuiteTest::DownloadBandwidth => (
                config.bandwidth_batches,
                Measurement::Throughput {
                    bytes_per_execution: config.bytes_per_batch(),
                },
            ),
            SuiteTest::CommandLatency => (config.command_latency_iterations, Measurement::Latency),
            SuiteTest::UploadLatency | SuiteTest::DownloadLatency => {
                (config.transfer_latency_iterations, Measurement::Latency)
            },
        };
        TestPlan::new(self.name(), repetitions, measurement)
    }

    fn operation<'b>(
        &self,
        backend: &'b mut dyn Backend,
        config: &BenchmarkConfig,
    ) -> std::result::Result<Box<dyn HardwareOperation + 'b>, OperationError> {
        match self {
            SuiteTest::UploadBandwidth => {
                backend.copy_operation(TransferDirection::Upload, config.large_transfer_bytes, config.copies_per_batch)
            },
            SuiteTest::DownloadBandwidth => {
                backend.copy_operation(TransferDirection::Download, config.large_transfer_bytes, config.copies_per_batch)
            },
            SuiteTest::CommandLatency => backend.noop_operation(),
            SuiteTest::UploadLatency => backend.copy_operation(TransferDirection::Upload, config.small_transfer_bytes, 1),
            SuiteTest::DownloadLatency => {
                backend.copy_operation(TransferDirection::Download, config.small_transfer_bytes, 1)
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrchestratorState {
    Idle,
    Running,
    Completed,
    Cancelled,
    /// A run ended with an error; the error was returned from `run`.
    Failed,
}

/// Classification of the midpoint between the upload and download bandwidth averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConnectionEstimate {
    pub measured_gbps: f64,
    pub classification: ClassificationResult,
}

/// Everything one suite run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteReport {
    /// 1-based run number.
    pub run: u64,
    pub source_label: String,
    pub device: String,
    /// Results in suite order.  Shorter than the suite when the run was cancelled.
    pub results: Vec<TestResult>,
    /// None unless both bandwidth tests produced a result.
    pub connection: Option<ConnectionEstimate>,
    pub cancelled: bool,
}

/// Sequences the benchmark suite against one backend, classifies the link and records results.
pub struct BenchmarkOrchestrator<'a> {
    config: BenchmarkConfig,
    backend: &'a mut dyn Backend,
    progress: &'a dyn ProgressReporter,
    logger: ResultLogger,
    classifier: InterfaceClassifier<'static>,
    state: OrchestratorState,
    run_count: u64,
}

impl<'a> BenchmarkOrchestrator<'a> {
    /// Validates `config` and opens the result log when CSV logging is enabled.  An unopenable result log
    /// leaves logging disabled; it does not fail construction.
    pub fn new(
        config: BenchmarkConfig,
        backend: &'a mut dyn Backend,
        progress: &'a dyn ProgressReporter,
    ) -> Result<Self> {
        config.validate()?;

        let logger = if config.csv_logging_enabled {
            ResultLogger::open(&config.csv_path)
        } else {
            ResultLogger::disabled()
        };
        let classifier = InterfaceClassifier::new(config.realistic_range);

        Ok(Self {
            config,
            backend,
            progress,
            logger,
            classifier,
            state: OrchestratorState::Idle,
            run_count: 0,
        })
    }

    /// Replace the result logger picked by `new`.
    pub fn with_result_logger(mut self, logger: ResultLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn result_logger(&self) -> &ResultLogger {
        &self.logger
    }

    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    /// Number of suite runs started so far.
    pub fn run_count(&self) -> u64 {
        self.run_count
    }

    /// Run the suite once, or repeatedly in continuous mode, handing each finished run to `on_report`.
    ///
    /// In continuous mode `cancel` is polled once between runs; the harness polls it during runs as well.
    /// A run cut short by cancellation is still reported.  Any error fails the run, leaves the
    /// orchestrator in `Failed` and is returned.
    pub fn run(
        &mut self,
        cancel: &mut dyn CancellationSignal,
        mut on_report: impl FnMut(&SuiteReport),
    ) -> Result<OrchestratorState> {
        loop {
            self.run_count += 1;
            self.state = OrchestratorState::Running;

            let run = self.run_count;
            let report = match self.run_suite(cancel).log_error(format!("Benchmark run {run} failed")) {
                Ok(report) => report,
                Err(e) => {
                    self.state = OrchestratorState::Failed;
                    return Err(e);
                },
            };
            on_report(&report);

            if report.cancelled {
                self.state = OrchestratorState::Cancelled;
                break;
            }
            if !self.config.continuous_mode {
                self.state = OrchestratorState::Completed;
                break;
            }
            if cancel.poll_cancelled() {
                info!(runs = self.run_count, "continuous benchmark stopped");
                self.state = OrchestratorState::Cancelled;
                break;
            }
        }

        Ok(self.state)
    }

    fn run_suite(&mut self, cancel: &mut dyn CancellationSignal) -> Result<SuiteReport> {
        let run = self.run_count;
        info!(run, backend = self.backend.label(), "starting benchmark suite");

        let harness = TestHarness::new(self.progress);
        let mut results = Vec::with_capacity(SuiteTest::ALL.len());
        let mut upload_gbps = None;
        let mut download_gbps = None;
        let mut cancelled = false;

        for test in SuiteTest::ALL {
            let plan = test.plan(&self.config);
            let series = {
                let mut operation = test.operation(&mut *self.backend, &self.config)?;
                harness.run_timed_series(&plan, operation.as_mut(), Some(&mut *cancel))?
            };

            // Cancelled before the first repetition finished.
            if !series.samples.is_empty() {
                let result = summarize(plan.name, &series.samples, plan.measurement.unit())?;
                debug!(test = %result.name, avg = result.avg, unit = %result.unit, "test finished");
                match test {
                    SuiteTest::UploadBandwidth => upload_gbps = Some(result.avg),
                    SuiteTest::DownloadBandwidth => download_gbps = Some(result.avg),
                    _ => {},
                }
                results.push(result);
            }

            if series.cancelled {
                info!(run, test = test.name(), "benchmark suite cancelled");
                cancelled = true;
                break;
            }
        }

        let connection = match (upload_gbps, download_gbps) {
            (Some(up), Some(down)) => {
                let measured_gbps = (up + down) / 2.0;
                Some(ConnectionEstimate {
                    measured_gbps,
                    classification: self.classifier.analyze_bandwidth(measured_gbps),
                })
            },
            _ => None,
        };

        for result in &results {
            self.logger.log_result(result, self.backend.label())?;
        }

        if let Some(c) = &connection {
            info!(
                run,
                measured_gbps = c.measured_gbps,
                interface = c.classification.matched_profile.map(|p| p.name).unwrap_or("unknown"),
                percent = c.classification.percent_of_theoretical,
                realistic = c.classification.is_realistic,
                "benchmark suite finished"
            );
        } else {
            info!(run, tests = results.len(), "benchmark suite finished");
        }

        Ok(SuiteReport {
            run,
            source_label: self.backend.label().to_owned(),
            device: self.backend.device_description(),
            results,
            connection,
            cancelled,
        })
    }
}
