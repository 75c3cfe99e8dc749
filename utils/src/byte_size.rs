use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ByteSizeParseError {
    #[error("empty byte size")]
    Empty,
    #[error("invalid number in byte size {0:?}")]
    InvalidNumber(String),
    #[error("unknown byte size unit {0:?}")]
    UnknownUnit(String),
    #[error("byte size {0:?} overflows u64")]
    Overflow(String),
}

/// A number of bytes that parses from human strings like `256mb`, `1 KiB` or `4096`.
///
/// Decimal suffixes (`kb`, `mb`, `gb`, `tb`) are powers of 1000; binary suffixes (`kib`, `mib`, `gib`,
/// `tib`) are powers of 1024. A bare number is bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByteSize(u64);

impl ByteSize {
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    fn unit_multiplier(unit: &str) -> Option<u64> {
        Some(match unit {
            "" | "b" => 1,
            "k" | "kb" => 1_000,
            "m" | "mb" => 1_000_000,
            "g" | "gb" => 1_000_000_000,
            "t" | "tb" => 1_000_000_000_000,
            "ki" | "kib" => 1 << 10,
            "mi" | "mib" => 1 << 20,
            "gi" | "gib" => 1 << 30,
            "ti" | "tib" => 1 << 40,
            _ => return None,
        })
    }
}

impl FromStr for ByteSize {
    type Err = ByteSizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if s.is_empty() {
            return Err(ByteSizeParseError::Empty);
        }

        let split = s.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(s.len());
        let (number, unit) = s.split_at(split);
        let unit = unit.trim();

        let multiplier = Self::unit_multiplier(unit).ok_or_else(|| ByteSizeParseError::UnknownUnit(unit.to_owned()))?;

        if let Ok(n) = number.parse::<u64>() {
            return n
                .checked_mul(multiplier)
                .map(ByteSize)
                .ok_or_else(|| ByteSizeParseError::Overflow(s.clone()));
        }

        let n: f64 = number.parse().map_err(|_| ByteSizeParseError::InvalidNumber(number.to_owned()))?;
        let bytes = n * multiplier as f64;
        if !bytes.is_finite() || bytes < 0.0 || bytes > u64::MAX as f64 {
            return Err(ByteSizeParseError::Overflow(s));
        }
        Ok(ByteSize(bytes.round() as u64))
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const UNITS: [(&str, u64); 4] = [("TiB", 1 << 40), ("GiB", 1 << 30), ("MiB", 1 << 20), ("KiB", 1 << 10)];

        for (name, size) in UNITS {
            if self.0 >= size {
                if self.0 % size == 0 {
                    return write!(f, "{} {name}", self.0 / size);
                }
                return write!(f, "{:.2} {name}", self.0 as f64 / size as f64);
            }
        }
        write!(f, "{} B", self.0)
    }
}

impl fmt::Debug for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} ({} bytes)", self.0)
    }
}
