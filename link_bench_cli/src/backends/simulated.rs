use std::thread;
use std::time::Duration;

use link_bench::{Backend, HardwareOperation, OperationError, TransferDirection};

const BYTES_PER_GB: f64 = 1e9;

/// A modelled link: every submission costs a fixed latency and every byte costs `1 / bandwidth`.
/// Executions sleep for the modelled time, so measurements land slightly below the configured bandwidth.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    bandwidth_gbps: f64,
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(bandwidth_gbps: f64, latency_us: f64) -> Self {
        Self {
            bandwidth_gbps,
            latency: Duration::try_from_secs_f64(latency_us / 1e6).unwrap_or(Duration::ZERO),
        }
    }

    /// Modelled time for one submission of `copies` transfers of `bytes` each.
    pub fn transfer_time(&self, bytes: u64, copies: usize) -> Duration {
        let total = bytes as f64 * copies as f64;
        let wire = Duration::try_from_secs_f64(total / (self.bandwidth_gbps * BYTES_PER_GB)).unwrap_or(Duration::MAX);
        self.latency.saturating_add(wire)
    }
}

impl Backend for SimulatedBackend {
    fn label(&self) -> &str {
        "simulated"
    }

    fn device_description(&self) -> String {
        format!(
            "simulated link ({} GB/s, {} us per submission)",
            self.bandwidth_gbps,
            self.latency.as_secs_f64() * 1e6
        )
    }

    fn copy_operation(
        &mut self,
        _direction: TransferDirection,
        bytes: u64,
        copies: usize,
    ) -> Result<Box<dyn HardwareOperation + '_>, OperationError> {
        let duration = self.transfer_time(bytes, copies);
        Ok(Box::new(move || -> Result<(), OperationError> {
            thread::sleep(duration);
            Ok(())
        }))
    }

    fn noop_operation(&mut self) -> Result<Box<dyn HardwareOperation + '_>, OperationError> {
        let latency = self.latency;
        Ok(Box::new(move || -> Result<(), OperationError> {
            thread::sleep(latency);
            Ok(())
        }))
    }
}

#[cfg(test)]
mod tests {
    use link_bench::{Measurement, NoOpProgressReporter, TestHarness, TestPlan};
    use more_asserts::{assert_gt, assert_le};

    use super::*;

    #[test]
    fn test_transfer_time_model() {
        let backend = SimulatedBackend::new(2.0, 10.0);
        assert_eq!(backend.transfer_time(0, 1), Duration::from_micros(10));
        // 4 MB at 2 GB/s is 2 ms.
        let t = backend.transfer_time(1_000_000, 4);
        assert!((t.as_secs_f64() - 0.002_010).abs() < 1e-9, "{t:?}");
    }

    #[test]
    fn test_measured_bandwidth_does_not_exceed_model() {
        let mut backend = SimulatedBackend::new(1.0, 0.0);
        let plan = TestPlan::new(
            "sim",
            3,
            Measurement::Throughput {
                bytes_per_execution: 2_000_000,
            },
        );
        let mut op = backend.copy_operation(TransferDirection::Upload, 1_000_000, 2).unwrap();
        let series = TestHarness::new(&NoOpProgressReporter)
            .run_timed_series(&plan, op.as_mut(), None)
            .unwrap();

        for gbps in series.samples.as_slice() {
            assert_gt!(*gbps, 0.0);
            assert_le!(*gbps, 1.0 + 1e-6);
        }
    }
}
