//! Profit command implementation for the Fishcast CLI.

use std::io::{Read, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use fishcast_scorer::{DEFAULT_RECOMMENDATION_LIMIT, ProfitBatch, rank_recommendations};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::request::{RequestRecord, RequestSource};
use crate::response::{ProfitResponse, write_response};
use crate::{ARG_LIMIT, CliError};

/// CLI arguments for the `profit` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "profit",
    long_about = "Pair hotspot sites with market listings for the same \
                 species and rank the pairings by expected profit. The \
                 request holds `hotspots`, `markets` and `events` arrays.",
    about = "Rank fishing ground and market pairings by expected profit"
)]
#[ortho_config(prefix = "FISHCAST")]
pub(crate) struct ProfitArgs {
    /// Path to a JSON request; stdin when omitted or `-`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Maximum number of recommendations to return.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl ProfitArgs {
    pub(crate) fn into_config(self) -> Result<ProfitConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(ProfitConfig::from(merged))
    }
}

/// Resolved `profit` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProfitConfig {
    pub(crate) source: RequestSource,
    pub(crate) limit: usize,
}

impl From<ProfitArgs> for ProfitConfig {
    fn from(args: ProfitArgs) -> Self {
        Self {
            source: RequestSource::from(args.input),
            limit: args.limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT),
        }
    }
}

pub(crate) fn run_profit_with(
    args: ProfitArgs,
    stdin: &mut dyn Read,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let batch: ProfitBatch = RequestRecord::read(config.source, stdin)?.decode()?;
    let recommendations = rank_recommendations(&batch, config.limit);
    write_response(writer, &ProfitResponse { recommendations })
}

#[cfg(test)]
pub(crate) fn profit_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ProfitConfig, CliError> {
    let merged = ProfitArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(ProfitConfig::from(merged))
}
