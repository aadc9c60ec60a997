use wick::Sanitizer;
use wick_demos::common::{load_series, print_candles};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load a raw series (a fixture unless WICK_DEMOS_INPUT points at a file).
    let raw = load_series("inverted")?;

    // 2. Build a sanitizer with default options.
    let sanitizer = Sanitizer::builder().build()?;

    // 3. Run the pipeline. The input is borrowed and left untouched.
    let out = sanitizer.sanitize(&raw);

    // 4. Print the cleaned candles and what was done to them.
    print_candles(&out.data);
    println!("{:#?}", out.stats);
    for w in &out.warnings {
        println!("warning [{:?}]: {}", w.kind, w.message);
    }
    for e in &out.errors {
        println!("error   [{:?}]: {}", e.kind, e.message);
    }

    Ok(())
}
