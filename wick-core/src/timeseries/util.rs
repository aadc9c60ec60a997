//! Shared helpers for candle repair, quantization, and synthesis.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Candle;

/// Low and high that bound all four prices.
///
/// Returns `(low, high)` as `(min(o,h,l,c), max(o,h,l,c))`.
#[must_use]
pub fn ohlc_bounds(o: f64, h: f64, l: f64, c: f64) -> (f64, f64) {
    (o.min(h).min(l).min(c), o.max(h).max(l).max(c))
}

/// Round `x` to the nearest multiple of `quantum`, halves away from zero.
///
/// Uses decimal arithmetic so that quanta like `0.01` land on exact decimal
/// grid points; falls back to float arithmetic when either value does not fit
/// a `Decimal`. A non-finite or non-positive quantum leaves `x` untouched.
///
/// ```
/// use wick_core::quantize;
///
/// assert_eq!(quantize(101.5, 1.0), 102.0);
/// assert_eq!(quantize(101.234, 0.01), 101.23);
/// assert_eq!(quantize(1234.0, 5.0), 1235.0);
/// assert_eq!(quantize(7.0, 0.0), 7.0);
/// ```
#[must_use]
pub fn quantize(x: f64, quantum: f64) -> f64 {
    if !x.is_finite() || !quantum.is_finite() || quantum <= 0.0 {
        return x;
    }
    if quantum == 1.0 {
        return x.round();
    }
    let exact = || -> Option<f64> {
        let xd = Decimal::from_str(&x.to_string()).ok()?;
        let qd = Decimal::from_str(&quantum.to_string()).ok()?;
        let steps = xd
            .checked_div(qd)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        // Display then parse yields the f64 nearest the decimal grid point.
        steps.checked_mul(qd)?.to_string().parse::<f64>().ok()
    };
    exact().unwrap_or_else(|| (x / quantum).round() * quantum)
}

/// Linear interpolation between `start` and `end`.
#[must_use]
pub fn lerp(start: f64, end: f64, ratio: f64) -> f64 {
    (end - start).mul_add(ratio, start)
}

/// Arithmetic mean of two values.
#[must_use]
pub fn avg(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

/// Round all four prices of a candle to the quantum, if one is set.
#[must_use]
pub fn quantize_candle(mut c: Candle, quantum: Option<f64>) -> Candle {
    if let Some(q) = quantum {
        c.o = quantize(c.o, q);
        c.h = quantize(c.h, q);
        c.l = quantize(c.l, q);
        c.c = quantize(c.c, q);
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_pick_extremes_regardless_of_field() {
        assert_eq!(ohlc_bounds(100.0, 90.0, 110.0, 95.0), (90.0, 110.0));
        assert_eq!(ohlc_bounds(5.0, 5.0, 5.0, 5.0), (5.0, 5.0));
    }

    #[test]
    fn quantize_is_monotonic_on_a_grid() {
        let xs = [0.004, 0.005, 0.006, 1.114, 1.115, 1.116, 99.995];
        let qs: Vec<f64> = xs.iter().map(|&x| quantize(x, 0.01)).collect();
        for w in qs.windows(2) {
            assert!(w[0] <= w[1], "{qs:?}");
        }
        assert_eq!(qs[1], 0.01);
        assert_eq!(qs[6], 100.0);
    }

    #[test]
    fn quantize_falls_back_for_huge_values() {
        let x = 1e40;
        assert_eq!(quantize(x, 0.5), x);
    }

    #[test]
    fn lerp_hits_endpoints() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
    }
}
