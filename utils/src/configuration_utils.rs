use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::ByteSize;

/// Prefix shared by every environment variable the benchmark reads.
pub const ENV_PREFIX: &str = "LINKBENCH_";

/// A trait to control how a value is parsed from an environment string or other config source
/// if it's present.
pub trait ParsableConfigValue: std::fmt::Debug + Sized {
    fn parse_user_value(value: &str) -> Option<Self>;

    /// Parse the value, returning the default if it can't be parsed.
    /// Issue a warning if it can't be parsed.
    fn parse(variable_name: &str, value: Option<String>, default: Self) -> Self {
        match value {
            Some(v) => match Self::parse_user_value(&v) {
                Some(v) => {
                    info!("Config: {variable_name} = {v:?} (user set)");
                    v
                },
                None => {
                    warn!(
                        "Configuration value {v} for {variable_name} cannot be parsed into correct type; reverting to default."
                    );
                    info!("Config: {variable_name} = {default:?} (default due to parse error)");
                    default
                },
            },
            None => {
                debug!("Config: {variable_name} = {default:?} (default)");
                default
            },
        }
    }
}

/// Most values work with the FromStr implementation, but we want to override the behavior for some types
/// (e.g. Option<T> and bool) to have custom parsing behavior.
pub trait FromStrParseable: FromStr + std::fmt::Debug {}

impl<T: FromStrParseable> ParsableConfigValue for T {
    fn parse_user_value(value: &str) -> Option<Self> {
        value.trim().parse::<T>().ok()
    }
}

impl FromStrParseable for usize {}
impl FromStrParseable for u32 {}
impl FromStrParseable for u64 {}
impl FromStrParseable for f64 {}
impl FromStrParseable for String {}
impl FromStrParseable for ByteSize {}

/// Special handling for bool:
/// - true: "1","true","yes","y","on"  -> true
/// - false: "0","false","no","n","off" -> false
pub fn parse_bool_value(value: &str) -> Option<bool> {
    let t = value.trim().to_ascii_lowercase();

    match t.as_str() {
        "0" | "false" | "no" | "n" | "off" => Some(false),
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        _ => None,
    }
}

impl ParsableConfigValue for bool {
    fn parse_user_value(value: &str) -> Option<Self> {
        parse_bool_value(value)
    }
}

/// Enable Option<T> to allow the default value to be None if nothing is set and appear as
/// Some(Value) if the user specifies the value.
impl<T: ParsableConfigValue> ParsableConfigValue for Option<T> {
    fn parse_user_value(value: &str) -> Option<Self> {
        T::parse_user_value(value).map(Some)
    }
}

/// Expands a leading `~` and makes the path absolute relative to the current directory.
pub fn normalized_path_from_user_string(path: impl AsRef<str>) -> PathBuf {
    let expanded = shellexpand::tilde(path.as_ref());
    let path = PathBuf::from(expanded.as_ref());
    std::path::absolute(&path).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_parsing() {
        for v in ["1", "true", "YES", " y ", "On"] {
            assert_eq!(bool::parse_user_value(v), Some(true), "{v}");
        }
        for v in ["0", "false", "No", "n", "OFF"] {
            assert_eq!(bool::parse_user_value(v), Some(false), "{v}");
        }
        assert_eq!(bool::parse_user_value("maybe"), None);
    }

    #[test]
    fn test_parse_reverts_to_default() {
        assert_eq!(usize::parse("X", Some("not a number".to_owned()), 7), 7);
        assert_eq!(usize::parse("X", Some("12".to_owned()), 7), 12);
        assert_eq!(usize::parse("X", None, 7), 7);
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!(Option::<u64>::parse("X", Some("5".to_owned()), None), Some(5));
        assert_eq!(Option::<u64>::parse("X", None, None), None);
    }

    #[test]
    fn test_byte_size_parsing() {
        let v = ByteSize::parse("X", Some("2kib".to_owned()), ByteSize::new(1));
        assert_eq!(v.as_u64(), 2048);
    }

    #[test]
    fn test_normalized_path_is_absolute() {
        let p = normalized_path_from_user_string("results.csv");
        assert!(p.is_absolute());
        assert!(p.ends_with("results.csv"));
    }
}
