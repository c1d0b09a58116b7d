#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for profit recommendations.

use std::cell::RefCell;

use fishcast_scorer::{
    CulturalEvent, DEFAULT_RECOMMENDATION_LIMIT, FestivalImpact, HotspotSite, MarketListing,
    ProfitBatch, Recommendation, rank_recommendations,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the profit scenarios.
pub struct ProfitContext {
    batch: RefCell<ProfitBatch>,
    ranked: RefCell<Option<Vec<Recommendation>>>,
}

#[fixture]
/// Build a fresh `ProfitContext` with an empty batch.
pub fn context() -> ProfitContext {
    ProfitContext {
        batch: RefCell::new(ProfitBatch::default()),
        ranked: RefCell::new(None),
    }
}

fn ground(species: &str, latitude: f64) -> HotspotSite {
    HotspotSite {
        latitude,
        longitude: 72.8,
        species: vec![species.to_owned()],
        fish_density_score: 80.0,
    }
}

fn market(species: &str, price: f64) -> MarketListing {
    MarketListing {
        location: "Sassoon Dock".to_owned(),
        species: species.to_owned(),
        current_price: price,
        price_trend: "0%".to_owned(),
        festival_impact: None,
    }
}

#[given("a pomfret ground and a tuna ground")]
fn grounds(context: &ProfitContext) {
    let mut batch = context.batch.borrow_mut();
    batch.hotspots = vec![ground("Pomfret", 18.9), ground("Tuna", 15.2)];
}

#[given("pomfret and tuna markets")]
fn markets(context: &ProfitContext) {
    let mut batch = context.batch.borrow_mut();
    batch.markets = vec![market("Pomfret", 100.0), market("Tuna", 150.0)];
}

#[given("a pomfret festival two days away with doubled demand")]
fn pomfret_festival(context: &ProfitContext) {
    let mut batch = context.batch.borrow_mut();
    if let Some(listing) = batch
        .markets
        .iter_mut()
        .find(|listing| listing.species == "Pomfret")
    {
        listing.festival_impact = Some(FestivalImpact {
            upcoming_festival: Some("Narali Purnima".to_owned()),
            days_until: Some(2),
        });
    }
    batch.events.push(CulturalEvent {
        event: "Narali Purnima".to_owned(),
        fish_demand_multiplier: 2.0,
    });
}

#[when("I rank the recommendations")]
fn rank(context: &ProfitContext) {
    let ranked = rank_recommendations(&context.batch.borrow(), DEFAULT_RECOMMENDATION_LIMIT);
    *context.ranked.borrow_mut() = Some(ranked);
}

#[when("I rank the top recommendation only")]
fn rank_top(context: &ProfitContext) {
    let ranked = rank_recommendations(&context.batch.borrow(), 1);
    *context.ranked.borrow_mut() = Some(ranked);
}

fn leading_species(context: &ProfitContext) -> String {
    context
        .ranked
        .borrow()
        .as_ref()
        .and_then(|ranked| ranked.first())
        .map(|best| best.species.clone())
        .expect("at least one recommendation")
}

#[then("the tuna pairing ranks first")]
fn tuna_first(context: &ProfitContext) {
    assert_eq!(leading_species(context), "Tuna");
}

#[then("the pomfret pairing ranks first")]
fn pomfret_first(context: &ProfitContext) {
    assert_eq!(leading_species(context), "Pomfret");
}

#[then("exactly one recommendation is returned")]
fn exactly_one(context: &ProfitContext) {
    let count = context.ranked.borrow().as_ref().map(Vec::len);
    assert_eq!(count, Some(1));
}

#[scenario(path = "tests/features/profit_recommendations.feature", index = 0)]
fn most_profitable_first(context: ProfitContext) {
    let _ = context;
}

#[scenario(path = "tests/features/profit_recommendations.feature", index = 1)]
fn festival_boost_reorders(context: ProfitContext) {
    let _ = context;
}

#[scenario(path = "tests/features/profit_recommendations.feature", index = 2)]
fn limit_is_respected(context: ProfitContext) {
    let _ = context;
}
