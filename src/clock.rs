//! Injectable "today" provider.
//!
//! Resolution logic never reads system time directly; it asks a [`Clock`].
//! Production code uses [`SystemClock`], tests pin a [`FixedClock`] so the
//! same fixture resolves to the same dates on every run. Two resolutions
//! straddling midnight observe the same "today" as long as they share a
//! fixed clock.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    /// The current date, as a plain calendar date without time or zone
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for deterministic test data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Create a fixed clock for the given date
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
