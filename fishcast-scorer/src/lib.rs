//! Scoring heuristics for Fishcast.
//!
//! The crate provides three capabilities:
//! - **Hotspot scoring** rates a fishing ground for a species from sea-surface
//!   temperature, chlorophyll, and salinity, adding a dawn bonus when the
//!   evaluation hour falls inside the early-morning window. Results are
//!   capped at 100.
//! - **Market timing** rates how favourable it is to sell now from festival
//!   proximity and demand trend. Results are not capped.
//! - **Profit recommendations** pair hotspot sites with market listings and
//!   rank the pairings by expected profit.
//!
//! All functions are pure. The only time input is an explicit
//! [`EvaluationHour`](fishcast_core::EvaluationHour); use
//! [`hotspot_score_now`] to read it from a [`Clock`](fishcast_core::Clock).
//!
//! # Examples
//!
//! ```
//! use fishcast_core::{EvaluationHour, HotspotConditions, MarketConditions, Species};
//! use fishcast_scorer::{hotspot_score, market_timing_score};
//!
//! # fn main() -> Result<(), fishcast_core::EvaluationHourError> {
//! let conditions = HotspotConditions::new(27.0, 0.8, 35.5, Species::Pomfret);
//! assert_eq!(hotspot_score(&conditions, EvaluationHour::new(12)?).get(), 75);
//! assert_eq!(hotspot_score(&conditions, EvaluationHour::new(6)?).get(), 100);
//!
//! let market = MarketConditions::new(120.0, 0, 0.0);
//! assert_eq!(market_timing_score(&market).get(), 35);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod hotspot;
mod market;
mod profit;
mod types;

pub use hotspot::{
    DAWN_BONUS, DAWN_WINDOW, Band, Rule, SpeciesRules, hotspot_score, hotspot_score_now,
    rules_for,
};
pub use market::{
    DEMAND_TREND_BONUS, DEMAND_TREND_THRESHOLD, FESTIVAL_POINTS_PER_DAY, FESTIVAL_WINDOW_DAYS,
    market_timing_score,
};
pub use profit::{
    AVERAGE_LANDED_VOLUME_KG, DEFAULT_FESTIVAL_DAYS, DEFAULT_RECOMMENDATION_LIMIT,
    parse_percentage, rank_recommendations,
};
pub use types::{
    Coordinates, CulturalEvent, FestivalImpact, HotspotSite, MarketListing, ProfitBatch,
    Recommendation, RecommendationDetails,
};
