mod host;
mod simulated;

use anyhow::{Result, anyhow, ensure};
pub use host::HostBackend;
use link_bench::Backend;
pub use simulated::SimulatedBackend;

/// Backend names accepted by `--backend`, with a one-line description each.
pub const BACKENDS: [(&str, &str); 2] = [
    ("host", "copies between two host memory buffers; measures the memory path only"),
    ("simulated", "modelled link with configurable bandwidth and submission latency"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackendOptions {
    pub sim_bandwidth_gbps: f64,
    pub sim_latency_us: f64,
}

/// Build the backend named `name` (case insensitive).
pub fn create_backend(name: &str, options: &BackendOptions) -> Result<Box<dyn Backend>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "host" => Ok(Box::new(HostBackend::new())),
        "simulated" => {
            ensure!(
                options.sim_bandwidth_gbps.is_finite() && options.sim_bandwidth_gbps > 0.0,
                "simulated bandwidth must be a positive number of GB/s, got {}",
                options.sim_bandwidth_gbps
            );
            ensure!(
                options.sim_latency_us.is_finite() && options.sim_latency_us >= 0.0,
                "simulated latency must be a non-negative number of microseconds, got {}",
                options.sim_latency_us
            );
            Ok(Box::new(SimulatedBackend::new(options.sim_bandwidth_gbps, options.sim_latency_us)))
        },
        _ => Err(anyhow!(
            "unknown backend {name:?}; available backends: {}",
            BACKENDS.map(|(n, _)| n).join(", ")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: BackendOptions = BackendOptions {
        sim_bandwidth_gbps: 10.0,
        sim_latency_us: 1.0,
    };

    #[test]
    fn test_known_backends() {
        for (name, _) in BACKENDS {
            let backend = create_backend(name, &OPTIONS).unwrap();
            assert_eq!(backend.label(), name);
            assert!(!backend.device_description().is_empty());
        }
        assert_eq!(create_backend(" Simulated ", &OPTIONS).unwrap().label(), "simulated");
    }

    #[test]
    fn test_unknown_backend_lists_available() {
        let err = create_backend("vulkan", &OPTIONS).err().unwrap().to_string();
        assert!(err.contains("\"vulkan\""), "{err}");
        assert!(err.contains("host, simulated"), "{err}");
    }

    #[test]
    fn test_invalid_simulation_parameters() {
        let options = BackendOptions {
            sim_bandwidth_gbps: 0.0,
            ..OPTIONS
        };
        assert!(create_backend("simulated", &options).is_err());

        let options = BackendOptions {
            sim_latency_us: f64::NAN,
            ..OPTIONS
        };
        assert!(create_backend("simulated", &options).is_err());
    }
}
