use std::path::PathBuf;

use bench_config::groups::log::ConfigValueGroup as LogConfigGroup;
use utils::normalized_path_from_user_string;

#[derive(Clone, Debug, PartialEq)]
pub enum LoggingMode {
    Directory(PathBuf),
    File(PathBuf),
    Console,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub logging_mode: LoggingMode,
    pub use_json: bool,
    pub prefix: String,
    pub version: String,
}

impl LoggingConfig {
    /// Build the logging setup from the `log` config group.  With no destination configured, logs go to
    /// the console so they interleave with the benchmark report on stderr.
    pub fn from_config(version: String, log: &LogConfigGroup) -> LoggingConfig {
        let logging_mode = match &log.dest {
            Some(log_dest) if !log_dest.trim().is_empty() => {
                let path = normalized_path_from_user_string(log_dest);

                if log_dest.ends_with('/')
                    || (cfg!(windows) && log_dest.ends_with('\\'))
                    || (path.exists() && path.is_dir())
                {
                    LoggingMode::Directory(path)
                } else {
                    LoggingMode::File(path)
                }
            },
            _ => LoggingMode::Console,
        };

        let use_json = {
            if let Some(format) = &log.format {
                format.to_ascii_lowercase().trim() == "json"
            } else {
                logging_mode != LoggingMode::Console
            }
        };

        Self {
            logging_mode,
            use_json,
            prefix: log.prefix.clone(),
            version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(dest: Option<&str>, format: Option<&str>) -> LogConfigGroup {
        let mut g = LogConfigGroup::default();
        g.dest = dest.map(str::to_owned);
        g.format = format.map(str::to_owned);
        g
    }

    #[test]
    fn test_console_by_default() {
        let cfg = LoggingConfig::from_config("v".into(), &group(None, None));
        assert_eq!(cfg.logging_mode, LoggingMode::Console);
        assert!(!cfg.use_json);

        let cfg = LoggingConfig::from_config("v".into(), &group(Some("  "), None));
        assert_eq!(cfg.logging_mode, LoggingMode::Console);
    }

    #[test]
    fn test_file_and_directory_modes() {
        let cfg = LoggingConfig::from_config("v".into(), &group(Some("/tmp/linkbench_logs/"), None));
        assert!(matches!(cfg.logging_mode, LoggingMode::Directory(_)));
        assert!(cfg.use_json);

        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().to_str().unwrap().to_owned();
        let cfg = LoggingConfig::from_config("v".into(), &group(Some(&existing), Some("text")));
        assert_eq!(cfg.logging_mode, LoggingMode::Directory(dir.path().to_path_buf()));
        assert!(!cfg.use_json);

        let file = dir.path().join("bench.log");
        let cfg = LoggingConfig::from_config("v".into(), &group(Some(file.to_str().unwrap()), None));
        assert_eq!(cfg.logging_mode, LoggingMode::File(file));
    }

    #[test]
    fn test_json_on_console_when_requested() {
        let cfg = LoggingConfig::from_config("v".into(), &group(None, Some(" JSON ")));
        assert_eq!(cfg.logging_mode, LoggingMode::Console);
        assert!(cfg.use_json);
    }
}
