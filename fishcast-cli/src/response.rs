//! Response records written to stdout.

use std::io::Write;

use fishcast_scorer::Recommendation;
use serde::Serialize;

use crate::CliError;

/// Error message for a combined request without a recognised action.
pub(crate) const UNKNOWN_ACTION: &str = "unknown action";

/// Result of a scoring command: `{"score": n}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub(crate) enum ScoreResponse {
    Score { score: u64 },
    Error { error: &'static str },
}

impl ScoreResponse {
    pub(crate) fn score(points: impl Into<u64>) -> Self {
        Self::Score {
            score: points.into(),
        }
    }

    pub(crate) const fn unknown_action() -> Self {
        Self::Error {
            error: UNKNOWN_ACTION,
        }
    }
}

/// Result of the `profit` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ProfitResponse {
    pub(crate) recommendations: Vec<Recommendation>,
}

/// Serialise `response` as one line of JSON.
pub(crate) fn write_response<T: Serialize>(
    writer: &mut dyn Write,
    response: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string(response).map_err(CliError::SerialiseResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)?;
    Ok(())
}
