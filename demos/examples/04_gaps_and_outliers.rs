use wick::{CandleOrigin, Sanitizer};
use wick_demos::common::{load_series, print_candles};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spike = load_series("spike")?;
    let gaps = wick_mock::series("gaps").ok_or("missing fixture")?;

    // Outlier interpolation is on by default.
    let default = Sanitizer::builder().build()?;
    let out = default.sanitize(&spike);
    println!("spike: {} outlier(s) interpolated", out.stats.outliers_detected);
    print_candles(&out.data);

    // Gap filling is opt-in.
    let filling = Sanitizer::builder().fill_gaps(true).build()?;
    let out = filling.sanitize(&gaps);
    let synthetic = out
        .data
        .iter()
        .filter(|c| c.origin == CandleOrigin::Filled)
        .count();
    println!("gaps: {synthetic} bar(s) filled");
    print_candles(&out.data);

    // Turning both off keeps the observed bars only.
    let plain = Sanitizer::builder().detect_outliers(false).build()?;
    println!("spike, no interpolation: {} bars", plain.sanitize(&spike).data.len());
    Ok(())
}
