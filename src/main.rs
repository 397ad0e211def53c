use std::env;
use std::io::Read;

use log::{info, warn};

use catalog_import::{parse_with_report, submit_products, RestStore, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or("Usage: catalog-import <file|-> [--submit] [--category <id>]")?;

    let raw = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };

    let report = parse_with_report(&raw);
    for skip in &report.skipped {
        warn!("Skipped line {} ({:?}): {}", skip.line, skip.reason, skip.text);
    }

    let submit = args.iter().any(|arg| arg == "--submit");
    let category = args
        .iter()
        .position(|arg| arg == "--category")
        .and_then(|idx| args.get(idx + 1))
        .cloned();

    if submit {
        let config = StoreConfig::load()?;
        let category = category
            .or_else(|| config.default_category.clone())
            .ok_or("Please provide --category <id> or set a default category in config")?;

        let store = RestStore::new(&config)?;
        let summary =
            submit_products(&store, &report.products, &category, &config.default_status).await;
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&report.products)?);
        info!(
            "Parsed {} products / {} variants ({} lines skipped)",
            report.products.len(),
            report.variant_count(),
            report.skipped.len()
        );
    }

    Ok(())
}
