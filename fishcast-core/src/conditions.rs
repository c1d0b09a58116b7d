//! Observations fed into the scoring heuristics.

use crate::Species;

/// Ocean conditions observed for a candidate fishing ground.
///
/// Values are taken as given; non-finite readings simply fail every
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotspotConditions {
    /// Sea-surface temperature in °C.
    pub sst: f64,
    /// Chlorophyll concentration in mg/m³.
    pub chlorophyll: f64,
    /// Salinity in PSU.
    pub salinity: f64,
    /// Target species.
    pub species: Species,
}

impl HotspotConditions {
    /// Bundle a set of ocean readings with a target species.
    #[must_use]
    pub const fn new(sst: f64, chlorophyll: f64, salinity: f64, species: Species) -> Self {
        Self {
            sst,
            chlorophyll,
            salinity,
            species,
        }
    }
}

/// Market signals used to time a sale.
///
/// # Examples
/// ```
/// use fishcast_core::MarketConditions;
///
/// let far_off = MarketConditions::default();
/// assert_eq!(far_off.festival_days, MarketConditions::FESTIVAL_FAR_AWAY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketConditions {
    /// Current price per kilogram. Carried for callers; not scored.
    pub current_price: f64,
    /// Days until the next festival. Negative values are accepted.
    pub festival_days: i64,
    /// Fractional change in demand, e.g. `0.1` for +10%.
    pub demand_trend: f64,
}

impl MarketConditions {
    /// Sentinel meaning "no festival in sight".
    pub const FESTIVAL_FAR_AWAY: i64 = 99;

    /// Bundle market signals.
    #[must_use]
    pub const fn new(current_price: f64, festival_days: i64, demand_trend: f64) -> Self {
        Self {
            current_price,
            festival_days,
            demand_trend,
        }
    }
}

impl Default for MarketConditions {
    fn default() -> Self {
        Self::new(0.0, Self::FESTIVAL_FAR_AWAY, 0.0)
    }
}
