use std::time::{Duration, Instant};

use tracing::debug;

use crate::cancellation::CancellationSignal;
use crate::error::Result;
use crate::operation::HardwareOperation;
use crate::progress::{ProgressDeduplicator, ProgressReporter};
use crate::samples::{SampleSeries, Unit};

const BYTES_PER_GB: f64 = 1e9;

/// How the elapsed time of one execution is turned into a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    /// GB/s for `bytes_per_execution` bytes moved by one execution.
    Throughput { bytes_per_execution: u64 },
    /// Microseconds per execution.
    Latency,
}

impl Measurement {
    pub fn unit(&self) -> Unit {
        match self {
            Measurement::Throughput { .. } => Unit::GigabytesPerSecond,
            Measurement::Latency => Unit::Microseconds,
        }
    }

    pub fn sample(&self, elapsed: Duration) -> f64 {
        match self {
            Measurement::Throughput { bytes_per_execution } => {
                // A zero reading is clamped so throughput stays finite.
                let secs = elapsed.max(Duration::from_nanos(1)).as_secs_f64();
                *bytes_per_execution as f64 / secs / BYTES_PER_GB
            },
            Measurement::Latency => elapsed.as_secs_f64() * 1e6,
        }
    }
}

/// One timed series to run: a name for progress and results, a repetition count, and the sample conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct TestPlan {
    pub name: String,
    pub repetitions: usize,
    pub measurement: Measurement,
}

impl TestPlan {
    pub fn new(name: impl Into<String>, repetitions: usize, measurement: Measurement) -> Self {
        Self {
            name: name.into(),
            repetitions,
            measurement,
        }
    }
}

/// Samples from one harness run.  `cancelled` is set when a stop request ended the series early;
/// `samples` then holds every repetition that completed.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedSeries {
    pub samples: SampleSeries,
    pub cancelled: bool,
}

/// Runs an operation repeatedly and times each execution with a monotonic clock.
#[derive(Debug)]
pub struct TestHarness<'a> {
    progress: &'a dyn ProgressReporter,
}

impl<'a> TestHarness<'a> {
    pub fn new(progress: &'a dyn ProgressReporter) -> Self {
        Self { progress }
    }

    /// Execute `operation` `plan.repetitions` times in sequence.
    ///
    /// With a cancellation signal, it is polled once after every repetition and the series stops as soon
    /// as it reports a stop request.  An operation failure aborts the series and is returned as is; nothing
    /// is retried.
    pub fn run_timed_series(
        &self,
        plan: &TestPlan,
        operation: &mut dyn HardwareOperation,
        mut cancel: Option<&mut dyn CancellationSignal>,
    ) -> Result<TimedSeries> {
        debug!(test = %plan.name, repetitions = plan.repetitions, "starting timed series");

        let mut samples = SampleSeries::with_capacity(plan.repetitions);
        let mut progress = ProgressDeduplicator::new(plan.repetitions);

        for i in 0..plan.repetitions {
            let start = Instant::now();
            operation.execute()?;
            let elapsed = start.elapsed();

            samples.push(plan.measurement.sample(elapsed));

            if let Some(percent) = progress.update(i + 1) {
                self.progress.report(&plan.name, percent);
            }

            if let Some(signal) = cancel.as_deref_mut() {
                if signal.poll_cancelled() {
                    debug!(test = %plan.name, completed = i + 1, "timed series cancelled");
                    return Ok(TimedSeries {
                        samples,
                        cancelled: true,
                    });
                }
            }
        }

        debug!(test = %plan.name, "timed series complete");
        Ok(TimedSeries {
            samples,
            cancelled: false,
        })
    }
}
