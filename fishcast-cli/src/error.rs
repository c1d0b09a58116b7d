//! Error types emitted by the Fishcast CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use fishcast_core::EvaluationHourError;
use thiserror::Error;

use crate::request::RequestSource;

/// Errors emitted by the Fishcast CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The configured evaluation hour is not an hour of the day.
    #[error("invalid --{field} value: {source}")]
    InvalidHour {
        /// Name of the offending CLI flag.
        field: &'static str,
        /// Underlying hour validation error.
        #[source]
        source: EvaluationHourError,
    },
    /// Opening the request file failed.
    #[error("failed to open request at {path:?}: {source}")]
    OpenRequest {
        /// Path of the request file.
        path: camino::Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading the request bytes failed.
    #[error("failed to read request from {origin}: {source}")]
    ReadRequest {
        /// Where the request was read from.
        origin: RequestSource,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The request is not valid JSON, or a field has the wrong type.
    #[error("failed to parse request JSON from {origin}: {source}")]
    ParseRequest {
        /// Where the request was read from.
        origin: RequestSource,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The request is valid JSON but not an object.
    #[error("request from {origin} must be a JSON object, found {found}")]
    RequestNotObject {
        /// Where the request was read from.
        origin: RequestSource,
        /// JSON kind that was found instead.
        found: &'static str,
    },
    /// Serializing the response failed.
    #[error("failed to serialize response: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the response failed.
    #[error("failed to write response: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Installing the log subscriber failed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}
