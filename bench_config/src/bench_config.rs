use crate::groups;

/// All configuration groups of the benchmark, loaded from compiled-in defaults and `LINKBENCH_*`
/// environment variables.
#[derive(Debug, Clone, Default)]
pub struct BenchConfig {
    pub benchmark: groups::benchmark::ConfigValueGroup,
    pub result_log: groups::result_log::ConfigValueGroup,
    pub classifier: groups::classifier::ConfigValueGroup,
    pub log: groups::log::ConfigValueGroup,
}

impl BenchConfig {
    /// Defaults with environment overrides applied.
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    pub fn apply_env_overrides(&mut self) {
        self.benchmark.apply_env_overrides();
        self.result_log.apply_env_overrides();
        self.classifier.apply_env_overrides();
        self.log.apply_env_overrides();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.benchmark.large_transfer_bytes.as_u64(), 256 << 20);
        assert_eq!(config.benchmark.small_transfer_bytes.as_u64(), 1);
        assert_eq!(config.benchmark.copies_per_batch, 4);
        assert!(!config.benchmark.continuous_mode);
        assert!(config.result_log.csv_logging_enabled);
        assert_eq!(config.classifier.realistic_min_percent, 60.0);
        assert_eq!(config.classifier.realistic_max_percent, 95.0);
        assert_eq!(config.log.prefix, "linkbench");
    }

    #[test]
    fn test_group_names() {
        assert_eq!(groups::benchmark::ConfigValueGroup::group_name(), "benchmark");
        assert_eq!(groups::result_log::ConfigValueGroup::group_name(), "result_log");
    }
}
