use wick::{Sanitizer, WickError};
use wick_demos::common::print_candles;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sanitizer = Sanitizer::builder().price_quantum(Some(0.01)).build()?;

    for symbol in wick_mock::CHART_SYMBOLS {
        let doc = wick_mock::chart(symbol).ok_or("missing fixture")?;
        match sanitizer.sanitize_chart(&doc) {
            Ok(chart) => {
                println!(
                    "{symbol}: {} of {} bars kept, granularity {}",
                    chart.series.stats.output,
                    chart.series.stats.input,
                    chart.granularity.as_deref().unwrap_or("unknown"),
                );
                print_candles(&chart.series.data);
            }
            Err(e @ WickError::Upstream(_)) => println!("{symbol}: upstream refused ({e}); retryable"),
            Err(e) => println!("{symbol}: unusable chart ({e})"),
        }
    }
    Ok(())
}
