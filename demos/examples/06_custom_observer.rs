use std::sync::{Arc, Mutex};

use serde_json::Value;
use wick::{EventLevel, SanitizeObserver, Sanitizer};

/// Collects run summaries for later inspection instead of logging them.
#[derive(Default)]
struct Collector {
    seen: Mutex<Vec<String>>,
}

impl SanitizeObserver for Collector {
    fn on_event(&self, level: EventLevel, message: &str, payload: &Value) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(format!("{level:?}: {message} {}", payload["stats"]["droppedInvalid"]));
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let collector = Arc::new(Collector::default());
    let sanitizer = Sanitizer::builder().observer(collector.clone()).build()?;

    for name in wick_mock::SERIES_NAMES {
        let raw = wick_mock::series(name).ok_or("missing fixture")?;
        let _ = sanitizer.sanitize(&raw);
    }

    let seen = collector.seen.lock().map_err(|_| "observer lock poisoned")?;
    for line in seen.iter() {
        println!("{line}");
    }
    Ok(())
}
