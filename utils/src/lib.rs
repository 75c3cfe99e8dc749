#![cfg_attr(feature = "strict", deny(warnings))]

pub mod byte_size;
pub use byte_size::{ByteSize, ByteSizeParseError};

pub mod configuration_utils;
pub use configuration_utils::{ENV_PREFIX, ParsableConfigValue, normalized_path_from_user_string};

mod guards;
pub use guards::EnvVarGuard;
