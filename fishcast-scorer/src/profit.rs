//! Profit-ranked pairings of fishing grounds and markets.
//!
//! A site pairs with every listing whose species it holds. Each pairing is
//! valued as predicted landed value plus the market timing score:
//!
//! ```text
//! predicted_price = current_price * (1 + trend) * festival_multiplier
//! expected_profit = predicted_price * catch_probability * volume + market_score
//! ```
//!
//! where `catch_probability` is the site density scaled onto `0..=1` and
//! `volume` is [`AVERAGE_LANDED_VOLUME_KG`].

use fishcast_core::MarketConditions;

use crate::market_timing_score;
use crate::types::{
    Coordinates, CulturalEvent, HotspotSite, MarketListing, ProfitBatch, Recommendation,
    RecommendationDetails,
};

/// Number of recommendations returned when no limit is configured.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Festival distance assumed when a listing does not give one.
pub const DEFAULT_FESTIVAL_DAYS: i64 = 10;

/// Assumed catch per trip, in kilograms.
pub const AVERAGE_LANDED_VOLUME_KG: f64 = 50.0;

/// Parse a percentage such as `"12%"` or `"-3.5%"` into a fraction.
///
/// Only the leading number counts, so trailing text such as `"12% YoY"` is
/// ignored. Text without a leading number, or one that overflows, yields
/// `0.0`.
///
/// # Examples
/// ```
/// use fishcast_scorer::parse_percentage;
///
/// assert_eq!(parse_percentage("12%"), 0.12);
/// assert_eq!(parse_percentage("15%↑"), 0.15);
/// assert_eq!(parse_percentage("steady"), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "percentages are converted to fractions"
)]
pub fn parse_percentage(text: &str) -> f64 {
    match numeric_prefix(text.trim_start()).parse::<f64>() {
        Ok(value) if value.is_finite() => value / 100.0,
        _ => 0.0,
    }
}

/// Longest prefix of `text` shaped like a decimal number with an optional
/// sign and exponent. Empty when `text` does not start with one.
fn numeric_prefix(text: &str) -> &str {
    let mut chars = text.char_indices().peekable();
    let mut end = 0;
    let mut has_digits = false;
    let mut seen_point = false;

    chars.next_if(|&(_, c)| matches!(c, '+' | '-'));
    while let Some((index, c)) =
        chars.next_if(|&(_, c)| c.is_ascii_digit() || (c == '.' && !seen_point))
    {
        if c == '.' {
            seen_point = true;
        } else {
            has_digits = true;
            end = index + 1;
        }
    }
    if !has_digits {
        return "";
    }
    if chars.next_if(|&(_, c)| matches!(c, 'e' | 'E')).is_some() {
        chars.next_if(|&(_, c)| matches!(c, '+' | '-'));
        while let Some((index, _)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
            end = index + 1;
        }
    }
    text.get(..end).unwrap_or_default()
}

/// Rank every site/market pairing by expected profit, best first.
///
/// Ties keep input order (sites outer, listings inner). At most `limit`
/// recommendations are returned.
#[must_use]
pub fn rank_recommendations(batch: &ProfitBatch, limit: usize) -> Vec<Recommendation> {
    let mut ranked: Vec<Recommendation> = batch
        .hotspots
        .iter()
        .flat_map(|site| {
            batch
                .markets
                .iter()
                .filter(|listing| site.species.contains(&listing.species))
                .map(move |listing| recommend(site, listing, &batch.events))
        })
        .collect();
    log::debug!("evaluated {} site/market pairings", ranked.len());
    ranked.sort_by(|a, b| b.expected_profit.cmp(&a.expected_profit));
    ranked.truncate(limit);
    ranked
}

fn recommend(site: &HotspotSite, listing: &MarketListing, events: &[CulturalEvent]) -> Recommendation {
    let festival = listing
        .festival_impact
        .as_ref()
        .and_then(|impact| impact.upcoming_festival.clone());
    let days_until = listing
        .festival_impact
        .as_ref()
        .and_then(|impact| impact.days_until)
        .unwrap_or(DEFAULT_FESTIVAL_DAYS);
    let multiplier = festival
        .as_deref()
        .and_then(|name| events.iter().find(|event| event.event == name))
        .map_or(1.0, |event| event.fish_demand_multiplier);
    let trend = parse_percentage(&listing.price_trend);
    let market = MarketConditions::new(listing.current_price, days_until, trend);
    let market_score = market_timing_score(&market).get();

    Recommendation {
        species: listing.species.clone(),
        location: listing.location.clone(),
        hotspot: Coordinates {
            lat: site.latitude,
            lng: site.longitude,
        },
        expected_profit: expected_profit(
            &market,
            multiplier,
            site.fish_density_score,
            market_score,
        ),
        details: RecommendationDetails {
            current_price: listing.current_price,
            price_trend: listing.price_trend.clone(),
            density: site.fish_density_score,
            festival,
        },
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "profit is a floating point estimate rounded to whole units"
)]
fn expected_profit(
    market: &MarketConditions,
    multiplier: f64,
    density: f64,
    market_score: u64,
) -> i64 {
    let catch_probability = (density / 100.0).clamp(0.0, 1.0);
    let predicted_price = market.current_price * (1.0 + market.demand_trend) * multiplier;
    let profit =
        predicted_price * catch_probability * AVERAGE_LANDED_VOLUME_KG + market_score as f64;
    // Half-way values round up, towards positive infinity.
    (profit + 0.5).floor() as i64
}
