use wick::{Sanitizer, series_stats, slice_by_offsets};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sanitizer = Sanitizer::default();
    let out = sanitizer.sanitize(&wick_mock::dirty_run(90));

    let stats = series_stats(&out.data).ok_or("empty series")?;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    // The ten most recent bars, newest last.
    let recent = slice_by_offsets(&out.data, 9, 0);
    println!(
        "bars {}..={} closes: {:?}",
        recent.start_index,
        recent.end_index,
        recent.data.iter().map(|c| c.c).collect::<Vec<_>>()
    );
    Ok(())
}
