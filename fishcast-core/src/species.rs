//! Target species recognised by the hotspot rules.
//!
//! The enum is closed: any name outside the known set maps to
//! [`Species::Unrecognised`], so rule tables can match exhaustively.
//!
//! # Examples
//! ```
//! use fishcast_core::Species;
//!
//! assert_eq!(Species::from("Tuna"), Species::Tuna);
//! assert_eq!(Species::from("tuna"), Species::Unrecognised);
//! assert_eq!(Species::Mackerel.to_string(), "Mackerel");
//! ```

#[cfg(feature = "serde")]
use serde::Deserialize;
#[cfg(feature = "serde")]
use serde::de::IgnoredAny;

/// Fish species with dedicated hotspot thresholds.
///
/// Deserialising never fails: names are matched as by [`Species::from`] and
/// any non-string value (`null`, numbers, arrays) is
/// [`Species::Unrecognised`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(from = "SpeciesField"))]
pub enum Species {
    /// Silver pomfret.
    Pomfret,
    /// Tuna.
    Tuna,
    /// Indian mackerel.
    Mackerel,
    /// Any other name, including an empty one.
    #[default]
    Unrecognised,
}

impl Species {
    /// Every species with a rule set, in table order.
    pub const KNOWN: [Self; 3] = [Self::Pomfret, Self::Tuna, Self::Mackerel];

    /// Return the canonical name, or an empty string for
    /// [`Species::Unrecognised`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pomfret => "Pomfret",
            Self::Tuna => "Tuna",
            Self::Mackerel => "Mackerel",
            Self::Unrecognised => "",
        }
    }

    /// Report whether the species has a rule set.
    #[must_use]
    pub const fn is_recognised(self) -> bool {
        !matches!(self, Self::Unrecognised)
    }
}

impl From<&str> for Species {
    // Names are matched exactly; case variants are not recognised.
    fn from(name: &str) -> Self {
        match name {
            "Pomfret" => Self::Pomfret,
            "Tuna" => Self::Tuna,
            "Mackerel" => Self::Mackerel,
            _ => Self::Unrecognised,
        }
    }
}

impl From<String> for Species {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

/// Raw JSON shape of a species field.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum SpeciesField {
    Name(String),
    Other(IgnoredAny),
}

#[cfg(feature = "serde")]
impl From<SpeciesField> for Species {
    fn from(field: SpeciesField) -> Self {
        match field {
            SpeciesField::Name(name) => Self::from(name),
            SpeciesField::Other(_) => Self::Unrecognised,
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Pomfret", Species::Pomfret)]
    #[case("Tuna", Species::Tuna)]
    #[case("Mackerel", Species::Mackerel)]
    #[case("", Species::Unrecognised)]
    #[case("Unknown", Species::Unrecognised)]
    #[case("POMFRET", Species::Unrecognised)]
    #[case(" Tuna", Species::Unrecognised)]
    fn parses_names_exactly(#[case] name: &str, #[case] expected: Species) {
        assert_eq!(Species::from(name), expected);
    }

    #[test]
    fn display_round_trips_known_names() {
        for species in Species::KNOWN {
            assert_eq!(Species::from(species.to_string().as_str()), species);
        }
    }

    #[test]
    fn default_is_unrecognised() {
        assert!(!Species::default().is_recognised());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialises_from_plain_strings() {
        let parsed: Vec<Species> =
            serde_json::from_str(r#"["Tuna", "Sardine"]"#).expect("species list");
        assert_eq!(parsed, vec![Species::Tuna, Species::Unrecognised]);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case("null")]
    #[case("5")]
    #[case("true")]
    #[case(r#"["Tuna"]"#)]
    #[case(r#"{"name": "Tuna"}"#)]
    fn non_string_values_deserialise_as_unrecognised(#[case] json: &str) {
        let parsed: Species = serde_json::from_str(json).expect("species value");
        assert_eq!(parsed, Species::Unrecognised);
    }
}
