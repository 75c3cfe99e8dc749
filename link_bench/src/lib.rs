#![cfg_attr(feature = "strict", deny(warnings))]

pub mod cancellation;
pub mod classifier;
pub mod config;
pub mod error;
pub mod harness;
pub mod interface;
pub mod operation;
pub mod orchestrator;
pub mod progress;
mod report;
pub mod result_log;
pub mod samples;
pub mod statistics;

pub use cancellation::{CancellationFlag, CancellationSignal, NeverCancel};
pub use classifier::{ClassificationResult, InterfaceClassifier, RealisticRange};
pub use config::BenchmarkConfig;
pub use error::{LinkBenchError, OperationError, Result};
pub use harness::{Measurement, TestHarness, TestPlan, TimedSeries};
pub use interface::{InterfaceProfile, REFERENCE_PROFILES};
pub use operation::{Backend, HardwareOperation, TransferDirection};
pub use orchestrator::{BenchmarkOrchestrator, ConnectionEstimate, OrchestratorState, SuiteReport, SuiteTest};
pub use progress::{NoOpProgressReporter, ProgressReporter};
pub use result_log::ResultLogger;
pub use samples::{SampleSeries, Unit};
pub use statistics::{summarize, TestResult};
