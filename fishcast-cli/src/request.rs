//! Request decoding shared by every subcommand.
//!
//! A request is one JSON object read from stdin or a file. Each subcommand
//! decodes the object into its own field set; absent fields take the
//! documented defaults and unknown fields (including `action`) are ignored.

use std::io::Read;

use camino::Utf8PathBuf;
use cap_std::{ambient_authority, fs_utf8};
use fishcast_core::{HotspotConditions, MarketConditions, Species};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::CliError;

/// Path value that selects stdin explicitly.
const STDIN_MARKER: &str = "-";

/// Where a request record is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(Utf8PathBuf),
}

impl From<Option<Utf8PathBuf>> for RequestSource {
    fn from(path: Option<Utf8PathBuf>) -> Self {
        match path {
            Some(file) if file.as_str() != STDIN_MARKER => Self::File(file),
            _ => Self::Stdin,
        }
    }
}

impl std::fmt::Display for RequestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin => f.write_str("stdin"),
            Self::File(path) => write!(f, "{path:?}"),
        }
    }
}

/// A decoded JSON object and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RequestRecord {
    origin: RequestSource,
    fields: Map<String, Value>,
}

impl RequestRecord {
    /// Read one JSON object from `source`, falling back to `stdin`.
    pub(crate) fn read(source: RequestSource, stdin: &mut dyn Read) -> Result<Self, CliError> {
        let text = match &source {
            RequestSource::Stdin => read_text(&source, stdin)?,
            RequestSource::File(path) => {
                let mut file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(
                    |err| CliError::OpenRequest {
                        path: path.clone(),
                        source: err,
                    },
                )?;
                read_text(&source, &mut file)?
            }
        };
        Self::parse(source, &text)
    }

    /// Parse `text` as a JSON object.
    pub(crate) fn parse(origin: RequestSource, text: &str) -> Result<Self, CliError> {
        let value: Value =
            serde_json::from_str(text).map_err(|source| CliError::ParseRequest {
                origin: origin.clone(),
                source,
            })?;
        match value {
            Value::Object(fields) => Ok(Self { origin, fields }),
            other => Err(CliError::RequestNotObject {
                origin,
                found: json_kind(&other),
            }),
        }
    }

    /// Return the `action` field when it is a string.
    pub(crate) fn action(&self) -> Option<&str> {
        self.fields.get("action").and_then(Value::as_str)
    }

    /// Decode the record into a subcommand's field set.
    pub(crate) fn decode<T: DeserializeOwned>(self) -> Result<T, CliError> {
        let Self { origin, fields } = self;
        serde_json::from_value(Value::Object(fields))
            .map_err(|source| CliError::ParseRequest { origin, source })
    }
}

fn read_text(origin: &RequestSource, reader: &mut dyn Read) -> Result<String, CliError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| CliError::ReadRequest {
            origin: origin.clone(),
            source,
        })?;
    Ok(text)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Field set of a hotspot request.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub(crate) struct HotspotRequest {
    #[serde(default)]
    pub(crate) sst: f64,
    #[serde(default)]
    pub(crate) chlorophyll: f64,
    #[serde(default)]
    pub(crate) salinity: f64,
    #[serde(default)]
    pub(crate) species: Species,
}

impl From<HotspotRequest> for HotspotConditions {
    fn from(request: HotspotRequest) -> Self {
        Self::new(
            request.sst,
            request.chlorophyll,
            request.salinity,
            request.species,
        )
    }
}

/// Field set of a market timing request.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub(crate) struct MarketRequest {
    #[serde(default)]
    pub(crate) current_price: f64,
    #[serde(default = "festival_far_away", deserialize_with = "whole_days")]
    pub(crate) festival_days: i64,
    #[serde(default)]
    pub(crate) demand_trend: f64,
}

const fn festival_far_away() -> i64 {
    MarketConditions::FESTIVAL_FAR_AWAY
}

/// Largest float magnitude accepted as a day count (2^53).
const MAX_WHOLE_DAYS: f64 = 9_007_199_254_740_992.0;

#[derive(Deserialize)]
#[serde(untagged)]
enum DayCount {
    Whole(i64),
    Float(f64),
}

/// Accept integers and integral floats such as `5.0`; reject fractions.
fn whole_days<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match DayCount::deserialize(deserializer)? {
        DayCount::Whole(days) => Ok(days),
        DayCount::Float(days) => float_to_whole_days(days).ok_or_else(|| {
            de::Error::custom(format!("festival_days must be a whole number, found {days}"))
        }),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is integral and within the exactly representable range"
)]
fn float_to_whole_days(days: f64) -> Option<i64> {
    let integral = days.is_finite() && days.fract() == 0.0 && days.abs() <= MAX_WHOLE_DAYS;
    integral.then_some(days as i64)
}

impl From<MarketRequest> for MarketConditions {
    fn from(request: MarketRequest) -> Self {
        Self::new(
            request.current_price,
            request.festival_days,
            request.demand_trend,
        )
    }
}

/// Scoring action named by a combined request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Hotspot,
    Market,
}

impl Action {
    pub(crate) fn parse(name: Option<&str>) -> Option<Self> {
        match name? {
            "hotspot" => Some(Self::Hotspot),
            "market" => Some(Self::Market),
            _ => None,
        }
    }
}
