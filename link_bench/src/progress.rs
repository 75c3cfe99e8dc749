use std::fmt::Debug;

/// Receives coarse per-test progress from the harness.
pub trait ProgressReporter: Debug {
    /// `percent` is in 0..=100 and never repeats consecutively for the same test.
    fn report(&self, test_name: &str, percent: u8);
}

#[derive(Debug)]
pub struct NoOpProgressReporter;

impl ProgressReporter for NoOpProgressReporter {
    fn report(&self, _: &str, _: u8) {}
}

/// Drops repeated percentages so a long series does not flood the reporter.
#[derive(Debug)]
pub(crate) struct ProgressDeduplicator {
    total: usize,
    last_percent: Option<u8>,
}

impl ProgressDeduplicator {
    pub(crate) fn new(total: usize) -> Self {
        Self {
            total,
            last_percent: None,
        }
    }

    /// Returns the percentage to emit after `completed` repetitions, or None if it equals the last one.
    pub(crate) fn update(&mut self, completed: usize) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let percent = ((completed.min(self.total) * 100) / self.total) as u8;
        if self.last_percent == Some(percent) {
            return None;
        }
        self.last_percent = Some(percent);
        Some(percent)
    }
}
