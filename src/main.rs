use tracing::{info, warn};
use utility_array::{UtilityArray, record, with_ordinal};

/// Settings for the demo run.
struct DemoConfig {
    /// How many rows each demo array holds.
    row_count: usize,
    /// Fallback filter when `RUST_LOG` is unset.
    log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            row_count: 10,
            log_level: "info".to_string(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::default();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .try_init()
        .ok();

    let mut numbers = UtilityArray::populate_with(config.row_count, |i| i)?;
    let uncles = UtilityArray::populate_with(config.row_count, |i| {
        record! {
            "index" => i,
            "bob" => format!("is your {} favourite uncle", with_ordinal(i as i64)),
        }
    })?;

    numbers.set_last(Some(20));
    info!(last = ?numbers.last(), len = numbers.len(), "numbers");
    if numbers.get(20).is_none() {
        warn!("set_last never grows the array; index 20 is still empty");
    }

    println!("{}", serde_json::to_string_pretty(&uncles.extract_map(&["index", "bob"]))?);

    for n in [1, 2, 3, 4, 11, 22, 101] {
        println!("{}", with_ordinal(n));
    }

    match uncles.find_by("index", 9usize) {
        Some(uncle) => println!("{}", serde_json::to_string(uncle)?),
        None => println!("no uncle at index 9"),
    }

    Ok(())
}
