/// Macro to create a configuration value group struct.
///
/// Usage:
/// ```rust
/// use bench_config::config_group;
///
/// config_group!({
///     ref TEST_INT: usize = 42;
///     ref TEST_STRING: String = "default".to_string();
/// });
/// ```
///
/// This creates a `ConfigValueGroup` struct with the specified fields, a `Default` implementation holding the
/// compiled-in values, and `apply_env_overrides()` that loads values from environment variables named
/// `LINKBENCH_<GROUP>_<FIELD>`, where `<GROUP>` is the last segment of the defining module's path.
#[macro_export]
macro_rules! config_group {
    ({
        $(
            $(#[$meta:meta])*
            ref $name:ident : $type:ty = $value:expr;
        )+
    }) => {
        #[allow(unused_imports)]
        use $crate::ParsableConfigValue;

        /// ConfigValueGroup struct containing all configurable values
        #[derive(Debug, Clone)]
        pub struct ConfigValueGroup {
            $(
                $(#[$meta])*
                #[allow(non_snake_case)]
                pub $name: $type,
            )+
        }

        impl Default for ConfigValueGroup {
            /// Create a new instance with default values only (no environment variable overrides).
            fn default() -> Self {
                Self {
                    $(
                        $name: {
                            let v: $type = $value;
                            v
                        },
                    )+
                }
            }
        }

        impl ConfigValueGroup {
            /// Create a new instance with default values only (no environment variable overrides).
            pub fn new() -> Self {
                Self::default()
            }

            /// The environment variable group name, derived from the module path.
            pub fn group_name() -> &'static str {
                module_path!().split("::").last().unwrap_or("unknown")
            }

            /// Apply environment variable overrides to this configuration group.
            ///
            /// For example, in module `bench_config::groups::benchmark`, the env var for `bandwidth_batches`
            /// is `LINKBENCH_BENCHMARK_BANDWIDTH_BATCHES`.
            pub fn apply_env_overrides(&mut self) {
                let group_name = Self::group_name().to_uppercase();

                $(
                    let env_var_name = format!(
                        "{}{}_{}",
                        $crate::ENV_PREFIX,
                        group_name,
                        stringify!($name).to_uppercase()
                    );
                    let maybe_env_value = std::env::var(&env_var_name).ok();
                    let default_value: $type = $value;
                    self.$name = <$type>::parse(&env_var_name, maybe_env_value, default_value);
                )+
            }
        }
    };
}
