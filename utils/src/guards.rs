use std::env;
use std::ffi::OsStr;

/// Guard that temporarily sets an environment variable and restores the previous value on drop.
///
/// Used by tests that drive configuration through `LINKBENCH_*` variables. When the guard is dropped,
/// the variable is restored to its previous state (or removed if it didn't exist before).
///
/// # Safety
///
/// `env::set_var` and `env::remove_var` are unsafe because of potential data races with other threads
/// reading the environment; callers serialize such tests with `serial_test`.
///
/// # Examples
///
/// ```no_run
/// use utils::EnvVarGuard;
///
/// let _guard = EnvVarGuard::set("LINKBENCH_BENCHMARK_BANDWIDTH_BATCHES", "4");
/// // restored when _guard goes out of scope
/// ```
pub struct EnvVarGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvVarGuard {
    pub fn set(key: &'static str, value: impl AsRef<OsStr>) -> Self {
        let prev = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self { key, prev }
    }

    /// Removes the variable for the lifetime of the guard.
    pub fn unset(key: &'static str) -> Self {
        let prev = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self { key, prev }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.prev {
            unsafe {
                env::set_var(self.key, v);
            }
        } else {
            unsafe {
                env::remove_var(self.key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial(default_config_env)]
    fn env_var_guard_sets_and_restores() {
        let key = "LINKBENCH_TEST_ENV_VAR_GUARD";

        unsafe {
            env::set_var(key, "initial");
        }

        {
            let _guard = EnvVarGuard::set(key, "temporary");
            assert_eq!(env::var(key).unwrap(), "temporary");
        }

        assert_eq!(env::var(key).unwrap(), "initial");
    }

    #[test]
    #[serial(default_config_env)]
    fn env_var_guard_restores_none_when_var_did_not_exist() {
        let key = "LINKBENCH_TEST_ENV_VAR_GUARD_NEW";

        unsafe {
            env::remove_var(key);
        }

        {
            let _guard = EnvVarGuard::set(key, "temporary");
            assert_eq!(env::var(key).unwrap(), "temporary");
        }

        assert!(env::var(key).is_err());
    }

    #[test]
    #[serial(default_config_env)]
    fn env_var_guard_unset_restores_value() {
        let key = "LINKBENCH_TEST_ENV_VAR_GUARD_UNSET";

        unsafe {
            env::set_var(key, "kept");
        }

        {
            let _guard = EnvVarGuard::unset(key);
            assert!(env::var(key).is_err());
        }

        assert_eq!(env::var(key).unwrap(), "kept");
        unsafe {
            env::remove_var(key);
        }
    }
}
