pub mod macros;

pub mod bench_config;
pub mod groups;

// Re-exported for use by the config_group macro.
pub use utils::ByteSize;
pub use utils::configuration_utils::{ENV_PREFIX, ParsableConfigValue};

pub use bench_config::BenchConfig;
