//! Core domain types for the Fishcast engine.
//!
//! These models describe the inputs and outputs of the hotspot and market
//! timing heuristics. They carry no behaviour beyond construction and
//! validation; the scoring rules live in `fishcast-scorer`.
//!
//! The evaluation hour is an explicit value so scoring stays deterministic.
//! Reading the wall clock is confined to the [`Clock`] seam.
//!
//! # Examples
//!
//! ```
//! use fishcast_core::{EvaluationHour, HotspotConditions, Species};
//!
//! # fn main() -> Result<(), fishcast_core::EvaluationHourError> {
//! let conditions = HotspotConditions::new(27.0, 0.8, 35.5, Species::Pomfret);
//! let hour = EvaluationHour::new(6)?;
//! assert_eq!(conditions.species, Species::Pomfret);
//! assert_eq!(hour.get(), 6);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod clock;
pub mod conditions;
pub mod score;
pub mod species;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use clock::{Clock, EvaluationHour, EvaluationHourError, SystemClock};
pub use conditions::{HotspotConditions, MarketConditions};
pub use score::{HotspotScore, MarketScore};
pub use species::Species;

#[cfg(any(test, feature = "test-support"))]
pub use test_support::FixedClock;
