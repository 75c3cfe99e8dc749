use serde::Serialize;

use crate::interface::{InterfaceProfile, REFERENCE_PROFILES};

/// Window of "percent of theoretical bandwidth" that counts as a plausible real-world measurement.
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RealisticRange {
    pub min_percent: f64,
    pub max_percent: f64,
}

impl RealisticRange {
    pub const DEFAULT_MIN_PERCENT: f64 = 60.0;
    pub const DEFAULT_MAX_PERCENT: f64 = 95.0;

    pub fn new(min_percent: f64, max_percent: f64) -> Self {
        Self {
            min_percent,
            max_percent,
        }
    }

    pub fn contains(&self, percent: f64) -> bool {
        self.min_percent <= percent && percent <= self.max_percent
    }
}

impl Default for RealisticRange {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_PERCENT, Self::DEFAULT_MAX_PERCENT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// None only when the profile table is empty.
    pub matched_profile: Option<InterfaceProfile>,
    pub percent_of_theoretical: f64,
    pub is_realistic: bool,
}

/// Maps a measured bandwidth to the most plausible link in a profile table.
#[derive(Debug, Clone)]
pub struct InterfaceClassifier<'a> {
    profiles: &'a [InterfaceProfile],
    range: RealisticRange,
}

impl Default for InterfaceClassifier<'static> {
    fn default() -> Self {
        Self::new(RealisticRange::default())
    }
}

impl InterfaceClassifier<'static> {
    /// Classifier over the compiled-in reference table.
    pub fn new(range: RealisticRange) -> Self {
        Self::with_profiles(&REFERENCE_PROFILES, range)
    }
}

impl<'a> InterfaceClassifier<'a> {
    pub fn with_profiles(profiles: &'a [InterfaceProfile], range: RealisticRange) -> Self {
        Self { profiles, range }
    }

    pub fn range(&self) -> RealisticRange {
        self.range
    }

    /// Nearest-match search, first among profiles where the measurement lands inside the realistic range,
    /// then among all profiles.  Never fails; the fallback result carries `is_realistic = false`.
    pub fn analyze_bandwidth(&self, measured_gbps: f64) -> ClassificationResult {
        let realistic = if measured_gbps > 0.0 && measured_gbps.is_finite() {
            self.nearest(measured_gbps, |p| {
                p.theoretical_gbps > 0.0 && self.range.contains(percent_of(measured_gbps, p))
            })
        } else {
            None
        };

        let (matched, is_realistic) = match realistic {
            Some(p) => (Some(p), true),
            None => (self.nearest(measured_gbps, |_| true), false),
        };

        ClassificationResult {
            matched_profile: matched.copied(),
            percent_of_theoretical: matched.map(|p| percent_of(measured_gbps, p)).unwrap_or(0.0),
            is_realistic,
        }
    }

    /// First profile (in table order) minimizing `|theoretical - measured|` among those accepted by `filter`.
    fn nearest(&self, measured_gbps: f64, filter: impl Fn(&InterfaceProfile) -> bool) -> Option<&'a InterfaceProfile> {
        let mut best: Option<(&'a InterfaceProfile, f64)> = None;

        for p in self.profiles.iter().filter(|p| filter(p)) {
            let diff = (p.theoretical_gbps - measured_gbps).abs();
            match best {
                Some((_, best_diff)) if diff >= best_diff => {},
                _ => best = Some((p, diff)),
            }
        }

        best.map(|(p, _)| p)
    }
}

fn percent_of(measured_gbps: f64, profile: &InterfaceProfile) -> f64 {
    if profile.theoretical_gbps > 0.0 {
        measured_gbps / profile.theoretical_gbps * 100.0
    } else {
        0.0
    }
}
