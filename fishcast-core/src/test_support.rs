//! Test-only [`Clock`] implementation used by unit and behaviour tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::{Clock, EvaluationHour};

/// [`Clock`] frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    /// Freeze the clock at `at`.
    #[must_use]
    pub const fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    /// Freeze the clock on the hour given, on an arbitrary fixed date.
    #[must_use]
    pub fn at_hour(hour: EvaluationHour) -> Self {
        let at = Utc
            .with_ymd_and_hms(2024, 1, 15, u32::from(hour.get()), 0, 0)
            .single()
            .unwrap_or_default();
        Self::new(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}
