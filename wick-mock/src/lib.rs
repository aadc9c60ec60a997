//! Deterministic dirty OHLCV fixtures for tests and demos.
//!
//! Every fixture is built in code, so tests never touch the network or the
//! filesystem. Series are one-minute bars starting at [`BASE_MS`].
#![warn(missing_docs)]

use serde_json::Value;
use wick_types::RawPoint;

mod fixtures;

pub use fixtures::chart::SYMBOLS as CHART_SYMBOLS;
pub use fixtures::series::{BASE_MS, NAMES as SERIES_NAMES, STEP_MS, dirty_run};

/// Raw points for a named fixture series.
///
/// Known names are listed in [`SERIES_NAMES`].
#[must_use]
pub fn series(name: &str) -> Option<Vec<RawPoint>> {
    fixtures::series::by_name(name)
}

/// A named fixture series as an untyped JSON array with long field names
/// (`timestamp`, `open`, ...).
#[must_use]
pub fn series_json(name: &str) -> Option<Value> {
    fixtures::series::json_by_name(name)
}

/// A Yahoo-style chart document; known symbols are listed in [`CHART_SYMBOLS`].
#[must_use]
pub fn chart(symbol: &str) -> Option<Value> {
    fixtures::chart::by_symbol(symbol)
}

/// A `{ meta, data }` payload envelope around a named fixture series.
#[must_use]
pub fn envelope(name: &str) -> Option<Value> {
    series_json(name).map(fixtures::chart::envelope)
}
