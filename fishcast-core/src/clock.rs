//! Evaluation time for hour-sensitive scoring.
//!
//! Scoring functions take an [`EvaluationHour`] rather than reading the
//! system time. Binaries obtain one from a [`Clock`], usually
//! [`SystemClock`], at the outermost boundary.

use chrono::{DateTime, Timelike, Utc};
use thiserror::Error;

/// Number of hours in a UTC day.
const HOURS_PER_DAY: u8 = 24;

/// Errors returned by [`EvaluationHour::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluationHourError {
    /// The supplied hour does not name an hour of the day.
    #[error("hour {hour} is outside 0..=23")]
    OutOfRange {
        /// Rejected hour value.
        hour: u8,
    },
}

/// A UTC hour of the day in `0..=23`.
///
/// # Examples
/// ```
/// use fishcast_core::{EvaluationHour, EvaluationHourError};
///
/// assert_eq!(EvaluationHour::new(23).map(EvaluationHour::get), Ok(23));
/// assert_eq!(
///     EvaluationHour::new(24),
///     Err(EvaluationHourError::OutOfRange { hour: 24 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EvaluationHour(u8);

impl EvaluationHour {
    /// Midnight UTC.
    pub const MIDNIGHT: Self = Self(0);

    /// Validate and wrap an hour value.
    ///
    /// # Errors
    /// Returns [`EvaluationHourError::OutOfRange`] when `hour` exceeds 23.
    pub const fn new(hour: u8) -> Result<Self, EvaluationHourError> {
        if hour < HOURS_PER_DAY {
            Ok(Self(hour))
        } else {
            Err(EvaluationHourError::OutOfRange { hour })
        }
    }

    /// Extract the hour of a UTC timestamp.
    #[must_use]
    pub fn from_datetime(at: &DateTime<Utc>) -> Self {
        // chrono keeps `hour()` below 24.
        u8::try_from(at.hour()).map_or(Self::MIDNIGHT, Self)
    }

    /// Return the wrapped hour.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for EvaluationHour {
    type Error = EvaluationHourError;

    fn try_from(hour: u8) -> Result<Self, Self::Error> {
        Self::new(hour)
    }
}

impl std::fmt::Display for EvaluationHour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00 UTC", self.0)
    }
}

/// Source of the current time.
///
/// Implementations must be thread-safe so scorers can share a clock across
/// threads.
///
/// # Examples
///
/// ```rust
/// use chrono::{DateTime, TimeZone, Utc};
/// use fishcast_core::{Clock, EvaluationHour};
///
/// struct Dawn;
///
/// impl Clock for Dawn {
///     fn now(&self) -> DateTime<Utc> {
///         Utc.with_ymd_and_hms(2024, 3, 1, 5, 30, 0).single().unwrap_or_default()
///     }
/// }
///
/// assert_eq!(Dawn.current_hour().get(), 5);
/// ```
pub trait Clock: Send + Sync {
    /// Return the current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Return the hour of [`Clock::now`].
    fn current_hour(&self) -> EvaluationHour {
        EvaluationHour::from_datetime(&self.now())
    }
}

/// [`Clock`] backed by the system wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
