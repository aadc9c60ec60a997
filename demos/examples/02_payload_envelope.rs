use wick::Sanitizer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let envelope = wick_mock::envelope("duplicates").ok_or("missing fixture")?;
    println!("in:  {envelope}");

    let sanitizer = Sanitizer::default();
    let out = sanitizer.sanitize_payload(&envelope);

    // `meta` gains `sanitized: true` and the run's counters as `sanitize_report`.
    println!("out: {}", serde_json::to_string_pretty(&out.to_value())?);
    Ok(())
}
