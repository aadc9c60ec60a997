use std::error::Error;

use wick::RawPoint;

/// Load a raw series for a demo.
///
/// If `WICK_DEMOS_INPUT` names a file, it is read as a JSON array of points;
/// otherwise the named `wick-mock` fixture is used.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a JSON array of
/// point objects, or if the fixture name is unknown.
pub fn load_series(fixture: &str) -> Result<Vec<RawPoint>, Box<dyn Error>> {
    if let Ok(path) = std::env::var("WICK_DEMOS_INPUT") {
        println!("--- (Reading points from {path}) ---");
        let text = std::fs::read_to_string(&path)?;
        return Ok(serde_json::from_str(&text)?);
    }
    wick_mock::series(fixture).ok_or_else(|| format!("unknown fixture: {fixture}").into())
}

/// Print one line per candle.
pub fn print_candles(candles: &[wick::Candle]) {
    for c in candles {
        println!(
            "{:>14}  o={:<10} h={:<10} l={:<10} c={:<10} v={:<12} {:?}",
            c.t, c.o, c.h, c.l, c.c, c.v, c.origin
        );
    }
}
