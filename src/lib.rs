//! Facade crate for the Fishcast scoring heuristics.
//!
//! This crate re-exports the core domain types and the scoring functions so
//! callers can depend on a single crate.

#![forbid(unsafe_code)]

pub use fishcast_core::{
    Clock, EvaluationHour, EvaluationHourError, HotspotConditions, HotspotScore,
    MarketConditions, MarketScore, Species, SystemClock,
};

#[cfg(feature = "test-support")]
pub use fishcast_core::FixedClock;

pub use fishcast_scorer::{
    Coordinates, CulturalEvent, FestivalImpact, HotspotSite, MarketListing, ProfitBatch,
    Recommendation, RecommendationDetails, hotspot_score, hotspot_score_now,
    market_timing_score, parse_percentage, rank_recommendations,
};
