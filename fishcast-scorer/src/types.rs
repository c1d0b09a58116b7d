//! Input and output records for profit recommendations.

use serde::{Deserialize, Serialize};

/// A surveyed fishing ground.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct HotspotSite {
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub longitude: f64,
    /// Species observed at the site.
    #[serde(default)]
    pub species: Vec<String>,
    /// Fish density on a `0..=100` scale.
    #[serde(default)]
    pub fish_density_score: f64,
}

/// Festival expected to move prices at a market.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct FestivalImpact {
    /// Name of the festival, matched against [`CulturalEvent::event`].
    #[serde(default)]
    pub upcoming_festival: Option<String>,
    /// Days until the festival starts.
    #[serde(default)]
    pub days_until: Option<i64>,
}

/// Current trading conditions for one species at one market.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct MarketListing {
    /// Market name.
    #[serde(default)]
    pub location: String,
    /// Species traded.
    #[serde(default)]
    pub species: String,
    /// Price per kilogram.
    #[serde(default)]
    pub current_price: f64,
    /// Percentage price movement such as `"12%"`.
    #[serde(default)]
    pub price_trend: String,
    /// Upcoming festival, if any.
    #[serde(default)]
    pub festival_impact: Option<FestivalImpact>,
}

/// A cultural event that changes fish demand.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CulturalEvent {
    /// Event name.
    pub event: String,
    /// Multiplier applied to predicted prices while the event is upcoming.
    #[serde(default = "unit_multiplier")]
    pub fish_demand_multiplier: f64,
}

const fn unit_multiplier() -> f64 {
    1.0
}

/// Everything needed to rank recommendations.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ProfitBatch {
    /// Candidate fishing grounds.
    #[serde(default)]
    pub hotspots: Vec<HotspotSite>,
    /// Market listings.
    #[serde(default)]
    pub markets: Vec<MarketListing>,
    /// Known cultural events.
    #[serde(default)]
    pub events: Vec<CulturalEvent>,
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

/// Inputs echoed alongside a recommendation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecommendationDetails {
    /// Market price per kilogram.
    pub current_price: f64,
    /// Raw price trend text.
    pub price_trend: String,
    /// Site fish density.
    pub density: f64,
    /// Upcoming festival name, if any.
    pub festival: Option<String>,
}

/// A ranked site/market pairing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Recommendation {
    /// Species to target.
    pub species: String,
    /// Market to sell at.
    pub location: String,
    /// Where to fish.
    pub hotspot: Coordinates,
    /// Rounded expected profit.
    pub expected_profit: i64,
    /// Supporting inputs.
    pub details: RecommendationDetails,
}
