use serde_json::{Value, json};

/// Symbols accepted by [`by_symbol`].
pub const SYMBOLS: &[&str] = &["AAPL", "FAIL", "EMPTY", "NOTS"];

/// A Yahoo-style chart document for the given symbol.
///
/// `AAPL` is a daily series in epoch seconds with one null cell and one
/// swapped high/low; `FAIL` carries an upstream error; `EMPTY` has no result;
/// `NOTS` has a result but no timestamps.
pub fn by_symbol(symbol: &str) -> Option<Value> {
    match symbol {
        "AAPL" => Some(json!({
            "chart": {
                "result": [{
                    "meta": {
                        "symbol": "AAPL",
                        "currency": "USD",
                        "exchangeName": "NMS",
                        "dataGranularity": "1D",
                        "range": "5d"
                    },
                    "timestamp": [1_704_205_800, 1_704_292_200, 1_704_378_600, 1_704_465_000, 1_704_724_200],
                    "indicators": {
                        "quote": [{
                            "open":   [187.15, 184.22, 182.15, null,   182.09],
                            "high":   [188.44, 185.88, 180.88, 182.76, 185.6],
                            "low":    [183.89, 183.43, 183.09, 180.17, 181.5],
                            "close":  [185.64, 184.25, 181.91, 181.18, 185.56],
                            "volume": [82_488_700, 58_414_500, 71_983_600, 62_303_300, 59_144_500]
                        }]
                    }
                }],
                "error": null
            }
        })),
        "FAIL" => Some(json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
            }
        })),
        "EMPTY" => Some(json!({ "chart": { "result": [], "error": null } })),
        "NOTS" => Some(json!({
            "chart": {
                "result": [{
                    "meta": { "symbol": "NOTS", "dataGranularity": "1wk" },
                    "indicators": { "quote": [{}] }
                }],
                "error": null
            }
        })),
        _ => None,
    }
}

/// Wrap a fixture series in a `{ meta, data }` payload envelope.
pub fn envelope(data: Value) -> Value {
    json!({
        "meta": { "symbol": "MOCK", "source": "wick-mock", "interval": "1m" },
        "data": data,
    })
}
