//! Score values produced by the heuristics.
//!
//! Hotspot scores are capped at [`HotspotScore::MAX`]; market scores are
//! not. Both serialise as bare integers.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Fishing suitability in `0..=100`.
///
/// # Examples
/// ```
/// use fishcast_core::HotspotScore;
///
/// assert_eq!(HotspotScore::saturating(130).get(), 100);
/// assert_eq!(HotspotScore::saturating(75).get(), 75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct HotspotScore(u8);

impl HotspotScore {
    /// Upper bound of the scale.
    pub const MAX: Self = Self(100);

    /// Clamp a raw point total onto the scale.
    #[must_use]
    pub fn saturating(points: u32) -> Self {
        u8::try_from(points.min(u32::from(Self::MAX.0))).map_or(Self::MAX, Self)
    }

    /// Return the score.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for HotspotScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Favourability of selling now. Unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct MarketScore(u64);

impl MarketScore {
    /// Wrap a point total.
    #[must_use]
    pub const fn new(points: u64) -> Self {
        Self(points)
    }

    /// Return the score.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MarketScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
