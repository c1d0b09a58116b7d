//! Shared test harness modules for the Fishcast CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod helpers;
mod logging_unit;
mod request_unit;
