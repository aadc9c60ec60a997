use tracing_subscriber::fmt::format::FmtSpan;
use wick::Sanitizer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,wick=debug,wick_core=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // The default observer forwards each run summary to tracing.
    let sanitizer = Sanitizer::builder().fill_gaps(true).build()?;
    tracing::info!(options = ?sanitizer.options(), "sanitizing demo fixtures");

    let _ = sanitizer.sanitize(&wick_mock::dirty_run(120));
    let _ = sanitizer.sanitize_payload(&wick_mock::envelope("garbage").ok_or("missing fixture")?);
    let _ = sanitizer.sanitize_chart(&wick_mock::chart("AAPL").ok_or("missing fixture")?)?;

    Ok(())
}
