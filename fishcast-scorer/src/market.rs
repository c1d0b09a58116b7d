//! Market timing heuristic.
//!
//! Two independent terms: festival proximity and demand trend. The total is
//! not capped. Negative festival distances score above the window instead
//! of being rejected.

use fishcast_core::{MarketConditions, MarketScore};

/// Festivals at most this many days away earn proximity points.
pub const FESTIVAL_WINDOW_DAYS: i64 = 7;

/// Points per day of the window still ahead of the festival.
pub const FESTIVAL_POINTS_PER_DAY: u64 = 5;

/// Demand trend must exceed this fraction to earn the trend bonus.
pub const DEMAND_TREND_THRESHOLD: f64 = 0.1;

/// Flat bonus for a rising demand trend.
pub const DEMAND_TREND_BONUS: u64 = 20;

/// Score how favourable it is to sell under `conditions`.
///
/// `current_price` does not contribute.
///
/// # Examples
/// ```
/// use fishcast_core::MarketConditions;
/// use fishcast_scorer::market_timing_score;
///
/// assert_eq!(market_timing_score(&MarketConditions::new(0.0, 7, 0.2)).get(), 20);
/// assert_eq!(market_timing_score(&MarketConditions::new(0.0, 10, 0.0)).get(), 0);
/// ```
#[must_use]
pub fn market_timing_score(conditions: &MarketConditions) -> MarketScore {
    let proximity = festival_points(conditions.festival_days);
    let trend = if conditions.demand_trend > DEMAND_TREND_THRESHOLD {
        DEMAND_TREND_BONUS
    } else {
        0
    };
    log::debug!(
        "market timing: festival_days={} proximity={proximity} trend={trend}",
        conditions.festival_days,
    );
    MarketScore::new(proximity.saturating_add(trend))
}

fn festival_points(festival_days: i64) -> u64 {
    if festival_days > FESTIVAL_WINDOW_DAYS {
        return 0;
    }
    if festival_days < 0 {
        log::warn!("festival_days is negative ({festival_days}); scoring without clamping");
    }
    // Non-negative: festival_days <= FESTIVAL_WINDOW_DAYS here.
    let days_inside = FESTIVAL_WINDOW_DAYS.saturating_sub(festival_days);
    u64::try_from(days_inside).map_or(0, |days| days.saturating_mul(FESTIVAL_POINTS_PER_DAY))
}
