use std::time::Duration;

use crate::backend::RestStore;
use crate::config::StoreConfig;
use crate::error::ImportError;
use crate::importer::submit_products;
use crate::model::{ImportSummary, ParseReport, SkippedLine};
use crate::parser::parse_with_report;

/// Result of a catalog import operation
#[derive(Debug, Clone)]
pub enum ImportOutcome {
    /// Parse-only run: products plus skip diagnostics, nothing submitted
    Parsed(ParseReport),
    /// Submitted run: what landed on the backend, plus the lines the parser
    /// dropped before submission
    Imported {
        summary: ImportSummary,
        skipped: Vec<SkippedLine>,
    },
}

/// Builder for configuring and executing catalog imports
#[derive(Debug, Default)]
pub struct CatalogImporterBuilder {
    text: Option<String>,
    category: Option<String>,
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    parse_only: bool,
}

impl CatalogImporterBuilder {
    /// Set the pasted product text to ingest
    ///
    /// # Example
    /// ```
    /// use catalog_import::CatalogImporter;
    ///
    /// let builder = CatalogImporter::builder()
    ///     .text("Glass Cleaner 500ml\t39.90");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the category every created product is linked to
    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.category = Some(category_id.into());
        self
    }

    /// Override the backend base URL instead of relying on configuration
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the API key directly instead of relying on environment variables
    /// or config files
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a timeout for backend requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Parse only: return the products and skip diagnostics without
    /// submitting anything
    ///
    /// # Example
    /// ```
    /// use catalog_import::CatalogImporter;
    ///
    /// let builder = CatalogImporter::builder()
    ///     .text("Glass Cleaner 500ml\t39.90")
    ///     .parse_only();
    /// ```
    pub fn parse_only(mut self) -> Self {
        self.parse_only = true;
        self
    }

    /// Build and execute the import operation
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No input text was specified
    /// - Submitting without a category (from builder or config)
    /// - Backend configuration cannot be loaded
    pub async fn build(self) -> Result<ImportOutcome, ImportError> {
        let text = self
            .text
            .ok_or_else(|| ImportError::Builder("No input text specified. Use .text()".to_string()))?;

        let report = parse_with_report(&text);

        if self.parse_only {
            return Ok(ImportOutcome::Parsed(report));
        }

        let mut config = match self.base_url {
            Some(base_url) => StoreConfig::new(base_url, self.api_key),
            None => {
                let mut loaded = StoreConfig::load()?;
                if let Some(key) = self.api_key {
                    loaded.api_key = Some(key);
                }
                loaded
            }
        };
        if let Some(timeout) = self.timeout {
            config.timeout = timeout.as_secs();
        }

        let category = self
            .category
            .or_else(|| config.default_category.clone())
            .ok_or_else(|| {
                ImportError::Builder(
                    "No category specified. Use .category() or set a default in config"
                        .to_string(),
                )
            })?;

        let store = RestStore::new(&config)?;
        let summary =
            submit_products(&store, &report.products, &category, &config.default_status).await;

        Ok(ImportOutcome::Imported {
            summary,
            skipped: report.skipped,
        })
    }
}

/// Main entry point for the builder API
pub struct CatalogImporter;

impl CatalogImporter {
    /// Creates a new builder for catalog imports
    ///
    /// # Example
    /// ```
    /// use catalog_import::CatalogImporter;
    ///
    /// let builder = CatalogImporter::builder();
    /// ```
    pub fn builder() -> CatalogImporterBuilder {
        CatalogImporterBuilder::default()
    }
}
