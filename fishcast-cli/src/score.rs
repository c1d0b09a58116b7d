//! Scoring commands: the combined `score` dispatcher and the single-action
//! `hotspot` and `market` commands.

use std::io::{Read, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use fishcast_core::{Clock, EvaluationHour, HotspotConditions, MarketConditions};
use fishcast_scorer::{hotspot_score, market_timing_score};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::request::{Action, HotspotRequest, MarketRequest, RequestRecord, RequestSource};
use crate::response::{ScoreResponse, write_response};
use crate::{ARG_HOUR, CliError};

/// CLI arguments for the combined `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score a request whose `action` field selects the heuristic: \
                 \"hotspot\" reads sst, chlorophyll, salinity and species; \
                 \"market\" reads current_price, festival_days and \
                 demand_trend. Any other action yields an error record.",
    about = "Score a request that names its action"
)]
#[ortho_config(prefix = "FISHCAST")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON request; stdin when omitted or `-`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// UTC hour (0-23) to evaluate hotspot requests at; defaults to now.
    #[arg(long = ARG_HOUR, value_name = "hour")]
    #[serde(default)]
    pub(crate) hour: Option<u8>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// CLI arguments for the `hotspot` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "hotspot",
    long_about = "Rate a fishing ground from sst, chlorophyll, salinity and \
                 species. Readings inside the early-morning window earn a \
                 bonus; pin the hour with --hour for reproducible output.",
    about = "Score fishing suitability"
)]
#[ortho_config(prefix = "FISHCAST")]
pub(crate) struct HotspotArgs {
    /// Path to a JSON request; stdin when omitted or `-`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// UTC hour (0-23) to evaluate at; defaults to now.
    #[arg(long = ARG_HOUR, value_name = "hour")]
    #[serde(default)]
    pub(crate) hour: Option<u8>,
}

impl HotspotArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(ScoreArgs {
            input: merged.input,
            hour: merged.hour,
        })
    }
}

/// CLI arguments for the `market` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "market",
    about = "Score market timing from festival proximity and demand trend"
)]
#[ortho_config(prefix = "FISHCAST")]
pub(crate) struct MarketArgs {
    /// Path to a JSON request; stdin when omitted or `-`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
}

impl MarketArgs {
    pub(crate) fn into_source(self) -> Result<RequestSource, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(RequestSource::from(merged.input))
    }
}

/// Resolved scoring configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    /// Where the request is read from.
    pub(crate) source: RequestSource,
    /// Pinned evaluation hour; `None` reads the clock.
    pub(crate) hour: Option<EvaluationHour>,
}

impl ScoreConfig {
    fn evaluation_hour(&self, clock: &dyn Clock) -> EvaluationHour {
        self.hour.unwrap_or_else(|| clock.current_hour())
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let hour = args
            .hour
            .map(EvaluationHour::new)
            .transpose()
            .map_err(|source| CliError::InvalidHour {
                field: ARG_HOUR,
                source,
            })?;
        Ok(Self {
            source: RequestSource::from(args.input),
            hour,
        })
    }
}

/// Run the combined dispatcher.
pub(crate) fn run_score_with(
    args: ScoreArgs,
    clock: &dyn Clock,
    stdin: &mut dyn Read,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let record = RequestRecord::read(config.source.clone(), stdin)?;
    let response = dispatch(record, &config, clock)?;
    write_response(writer, &response)
}

/// Run the hotspot-only command.
pub(crate) fn run_hotspot_with(
    args: HotspotArgs,
    clock: &dyn Clock,
    stdin: &mut dyn Read,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let record = RequestRecord::read(config.source.clone(), stdin)?;
    let response = score_hotspot(record, config.evaluation_hour(clock))?;
    write_response(writer, &response)
}

/// Run the market-only command.
pub(crate) fn run_market_with(
    args: MarketArgs,
    stdin: &mut dyn Read,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let source = args.into_source()?;
    let record = RequestRecord::read(source, stdin)?;
    let response = score_market(record)?;
    write_response(writer, &response)
}

/// Route a combined request to the heuristic its `action` names.
pub(crate) fn dispatch(
    record: RequestRecord,
    config: &ScoreConfig,
    clock: &dyn Clock,
) -> Result<ScoreResponse, CliError> {
    match Action::parse(record.action()) {
        Some(Action::Hotspot) => score_hotspot(record, config.evaluation_hour(clock)),
        Some(Action::Market) => score_market(record),
        None => {
            log::debug!("unrecognised action {:?}", record.action());
            Ok(ScoreResponse::unknown_action())
        }
    }
}

fn score_hotspot(record: RequestRecord, hour: EvaluationHour) -> Result<ScoreResponse, CliError> {
    let conditions = HotspotConditions::from(record.decode::<HotspotRequest>()?);
    Ok(ScoreResponse::score(hotspot_score(&conditions, hour).get()))
}

fn score_market(record: RequestRecord) -> Result<ScoreResponse, CliError> {
    let conditions = MarketConditions::from(record.decode::<MarketRequest>()?);
    Ok(ScoreResponse::score(market_timing_score(&conditions).get()))
}

#[cfg(test)]
pub(crate) fn score_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
