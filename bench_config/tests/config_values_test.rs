#![allow(non_snake_case)]

use bench_config::{BenchConfig, ByteSize, config_group};
use serial_test::serial;
use utils::EnvVarGuard;

mod example {
    use super::*;

    config_group!({
        /// Test integer value
        ref TEST_INT: usize = 42;

        /// Test string value
        ref TEST_STRING: String = "default".to_string();

        /// Test boolean value
        ref TEST_BOOL: bool = false;

        /// Test byte size value
        ref TEST_BYTE_SIZE: ByteSize = ByteSize::new(1_000_000);

        /// Test float value
        ref TEST_FLOAT: f64 = 0.5;

        /// Test optional value
        ref TEST_OPTIONAL: Option<String> = None;
    });
}

#[test]
#[serial(config_env)]
fn test_basic_configuration() {
    let _g1 = EnvVarGuard::unset("LINKBENCH_EXAMPLE_TEST_INT");
    let _g2 = EnvVarGuard::unset("LINKBENCH_EXAMPLE_TEST_STRING");
    let _g3 = EnvVarGuard::unset("LINKBENCH_EXAMPLE_TEST_BOOL");
    let _g4 = EnvVarGuard::unset("LINKBENCH_EXAMPLE_TEST_BYTE_SIZE");
    let _g5 = EnvVarGuard::unset("LINKBENCH_EXAMPLE_TEST_FLOAT");
    let _g6 = EnvVarGuard::unset("LINKBENCH_EXAMPLE_TEST_OPTIONAL");

    let mut config = example::ConfigValueGroup::new();
    config.apply_env_overrides();
    assert_eq!(config.TEST_INT, 42);
    assert_eq!(config.TEST_STRING, "default");
    assert!(!config.TEST_BOOL);
    assert_eq!(config.TEST_BYTE_SIZE.as_u64(), 1_000_000);
    assert_eq!(config.TEST_FLOAT, 0.5);
    assert_eq!(config.TEST_OPTIONAL, None);
}

#[test]
#[serial(config_env)]
fn test_environment_override() {
    let _g1 = EnvVarGuard::set("LINKBENCH_EXAMPLE_TEST_INT", "100");
    let _g2 = EnvVarGuard::set("LINKBENCH_EXAMPLE_TEST_STRING", "override");
    let _g3 = EnvVarGuard::set("LINKBENCH_EXAMPLE_TEST_BOOL", "yes");
    let _g4 = EnvVarGuard::set("LINKBENCH_EXAMPLE_TEST_BYTE_SIZE", "2mb");
    let _g5 = EnvVarGuard::set("LINKBENCH_EXAMPLE_TEST_FLOAT", "0.25");
    let _g6 = EnvVarGuard::set("LINKBENCH_EXAMPLE_TEST_OPTIONAL", "some_value");

    let mut config = example::ConfigValueGroup::new();
    config.apply_env_overrides();

    assert_eq!(config.TEST_INT, 100);
    assert_eq!(config.TEST_STRING, "override");
    assert!(config.TEST_BOOL);
    assert_eq!(config.TEST_BYTE_SIZE.as_u64(), 2_000_000);
    assert_eq!(config.TEST_FLOAT, 0.25);
    assert_eq!(config.TEST_OPTIONAL, Some("some_value".to_string()));
}

#[test]
#[serial(config_env)]
fn test_invalid_env_value_falls_back_to_default() {
    let _guard = EnvVarGuard::set("LINKBENCH_EXAMPLE_TEST_INT", "not_a_number");
    let mut config = example::ConfigValueGroup::new();
    config.apply_env_overrides();
    assert_eq!(config.TEST_INT, 42);
}

#[test]
#[serial(config_env)]
fn test_bench_config_reads_group_variables() {
    let _g1 = EnvVarGuard::set("LINKBENCH_BENCHMARK_LARGE_TRANSFER_BYTES", "64mib");
    let _g2 = EnvVarGuard::set("LINKBENCH_BENCHMARK_CONTINUOUS_MODE", "1");
    let _g3 = EnvVarGuard::set("LINKBENCH_RESULT_LOG_CSV_PATH", "/tmp/links.csv");
    let _g4 = EnvVarGuard::set("LINKBENCH_CLASSIFIER_REALISTIC_MAX_PERCENT", "97.5");

    let config = BenchConfig::new();
    assert_eq!(config.benchmark.large_transfer_bytes.as_u64(), 64 << 20);
    assert!(config.benchmark.continuous_mode);
    assert_eq!(config.result_log.csv_path, "/tmp/links.csv");
    assert_eq!(config.classifier.realistic_max_percent, 97.5);
    // untouched groups keep defaults
    assert_eq!(config.benchmark.bandwidth_batches, 32);
}
