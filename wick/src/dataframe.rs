//! Conversion of cleaned candles into a `polars` `DataFrame`.

use polars::prelude::*;

use wick_core::{Candle, WickError};

/// Convert a collection of candles into a `DataFrame` with columns
/// `t, o, h, l, c, v`.
pub trait ToDataFrame {
    /// Build the frame.
    ///
    /// # Errors
    /// Returns `WickError::Data` if polars rejects the columns.
    fn to_dataframe(&self) -> Result<DataFrame, WickError>;
}

impl ToDataFrame for [Candle] {
    fn to_dataframe(&self) -> Result<DataFrame, WickError> {
        let t: Vec<i64> = self.iter().map(|k| k.t).collect();
        let o: Vec<f64> = self.iter().map(|k| k.o).collect();
        let h: Vec<f64> = self.iter().map(|k| k.h).collect();
        let l: Vec<f64> = self.iter().map(|k| k.l).collect();
        let c: Vec<f64> = self.iter().map(|k| k.c).collect();
        let v: Vec<f64> = self.iter().map(|k| k.v).collect();
        df!(
            "t" => t,
            "o" => o,
            "h" => h,
            "l" => l,
            "c" => c,
            "v" => v
        )
        .map_err(|e| WickError::data(format!("failed to build dataframe: {e}")))
    }
}

impl ToDataFrame for Vec<Candle> {
    fn to_dataframe(&self) -> Result<DataFrame, WickError> {
        self.as_slice().to_dataframe()
    }
}
