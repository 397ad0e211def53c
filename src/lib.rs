pub mod backend;
pub mod builder;
pub mod config;
pub mod error;
pub mod importer;
pub mod model;
pub mod parser;

use log::debug;

pub use backend::{ProductStore, RestStore};
pub use builder::{CatalogImporter, CatalogImporterBuilder, ImportOutcome};
pub use config::StoreConfig;
pub use error::ImportError;
pub use importer::submit_products;
pub use model::{
    ImportSummary, NewProduct, ParseReport, ParsedProduct, SkipReason, SkippedLine, Variant,
};
pub use parser::{
    derive_sku, extract_size, parse_product_data, parse_with_report, SizeSplit, DEFAULT_SIZE,
};

/// Parse pasted product text and submit everything to the configured backend,
/// linking each created product to `category_id`.
///
/// Configuration comes from `config.toml` / `CATALOG__*` environment
/// variables; use [`CatalogImporter::builder`] for per-call overrides.
pub async fn import_products(
    raw_text: &str,
    category_id: &str,
) -> Result<ImportSummary, ImportError> {
    let config = StoreConfig::load()?;
    let store = RestStore::new(&config)?;

    let report = parse_with_report(raw_text);
    debug!(
        "Parsed {} products / {} variants, {} lines skipped",
        report.products.len(),
        report.variant_count(),
        report.skipped.len()
    );

    Ok(submit_products(&store, &report.products, category_id, &config.default_status).await)
}
