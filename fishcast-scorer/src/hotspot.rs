//! Hotspot suitability rules.
//!
//! Each recognised species has three independent thresholds (SST,
//! chlorophyll, salinity). Every satisfied threshold adds its points; the
//! dawn bonus is added on top and the total is capped at 100.

use std::ops::RangeInclusive;

use fishcast_core::{Clock, EvaluationHour, HotspotConditions, HotspotScore, Species};

/// UTC hours, inclusive, that earn the dawn bonus.
pub const DAWN_WINDOW: RangeInclusive<u8> = 4..=8;

/// Points added inside [`DAWN_WINDOW`].
pub const DAWN_BONUS: u32 = 25;

/// Acceptance test applied to a single reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Band {
    /// `low <= value <= high`.
    Between {
        /// Inclusive lower bound.
        low: f64,
        /// Inclusive upper bound.
        high: f64,
    },
    /// `value > floor`.
    Above {
        /// Exclusive lower bound.
        floor: f64,
    },
}

impl Band {
    /// Report whether `value` falls inside the band. `NaN` never does.
    #[must_use]
    pub const fn contains(self, value: f64) -> bool {
        match self {
            Self::Between { low, high } => low <= value && value <= high,
            Self::Above { floor } => value > floor,
        }
    }
}

/// A band and the points it awards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    /// Readings that satisfy the rule.
    pub band: Band,
    /// Points awarded when satisfied.
    pub points: u32,
}

impl Rule {
    const fn between(low: f64, high: f64, points: u32) -> Self {
        Self {
            band: Band::Between { low, high },
            points,
        }
    }

    const fn above(floor: f64, points: u32) -> Self {
        Self {
            band: Band::Above { floor },
            points,
        }
    }

    /// Points earned by `value`.
    #[must_use]
    pub const fn award(self, value: f64) -> u32 {
        if self.band.contains(value) {
            self.points
        } else {
            0
        }
    }
}

/// Thresholds for one species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesRules {
    /// Sea-surface temperature rule.
    pub sst: Rule,
    /// Chlorophyll rule.
    pub chlorophyll: Rule,
    /// Salinity rule.
    pub salinity: Rule,
}

impl SpeciesRules {
    /// Sum the points the readings earn.
    #[must_use]
    pub fn award(&self, conditions: &HotspotConditions) -> u32 {
        let sst = self.sst.award(conditions.sst);
        let chlorophyll = self.chlorophyll.award(conditions.chlorophyll);
        let salinity = self.salinity.award(conditions.salinity);
        log::debug!(
            "{species} rules awarded sst={sst} chlorophyll={chlorophyll} salinity={salinity}",
            species = conditions.species,
        );
        sst.saturating_add(chlorophyll).saturating_add(salinity)
    }
}

static POMFRET: SpeciesRules = SpeciesRules {
    sst: Rule::between(26.0, 29.0, 30),
    chlorophyll: Rule::above(0.7, 25),
    salinity: Rule::between(35.0, 36.0, 20),
};

static TUNA: SpeciesRules = SpeciesRules {
    sst: Rule::between(28.0, 31.0, 30),
    chlorophyll: Rule::above(0.5, 25),
    salinity: Rule::above(35.5, 20),
};

static MACKEREL: SpeciesRules = SpeciesRules {
    sst: Rule::between(27.0, 30.0, 25),
    chlorophyll: Rule::above(0.6, 20),
    salinity: Rule::between(34.5, 36.0, 15),
};

/// Return the rule set for `species`, or `None` when it has none.
///
/// # Examples
/// ```
/// use fishcast_core::Species;
/// use fishcast_scorer::rules_for;
///
/// assert!(rules_for(Species::Tuna).is_some());
/// assert!(rules_for(Species::Unrecognised).is_none());
/// ```
#[must_use]
pub fn rules_for(species: Species) -> Option<&'static SpeciesRules> {
    match species {
        Species::Pomfret => Some(&POMFRET),
        Species::Tuna => Some(&TUNA),
        Species::Mackerel => Some(&MACKEREL),
        Species::Unrecognised => None,
    }
}

/// Score a fishing ground for the conditions at `hour`.
///
/// The result is always within `0..=100`.
#[must_use]
pub fn hotspot_score(conditions: &HotspotConditions, hour: EvaluationHour) -> HotspotScore {
    let species_points = rules_for(conditions.species).map_or(0, |rules| rules.award(conditions));
    let dawn_points = if DAWN_WINDOW.contains(&hour.get()) {
        DAWN_BONUS
    } else {
        0
    };
    log::debug!("hotspot at {hour}: species={species_points} dawn={dawn_points}");
    HotspotScore::saturating(species_points.saturating_add(dawn_points))
}

/// Score a fishing ground for the conditions at the clock's current hour.
#[must_use]
pub fn hotspot_score_now(conditions: &HotspotConditions, clock: &dyn Clock) -> HotspotScore {
    hotspot_score(conditions, clock.current_hour())
}
