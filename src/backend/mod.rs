mod rest;

pub use rest::RestStore;

use async_trait::async_trait;

use crate::error::ImportError;
use crate::model::{NewProduct, Variant};

/// Catalog persistence operations the import workflow needs.
///
/// One product is submitted as a create-product call, one create-variants
/// batch, and one category link; there is no transactional guarantee across
/// the triple and callers treat partial writes as an accepted failure mode.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Get the store name (e.g., "rest") for log lines
    fn store_name(&self) -> &str;

    /// Create a product and return its backend-assigned identifier
    async fn create_product(&self, product: &NewProduct) -> Result<String, ImportError>;

    /// Create a batch of variants under an existing product, zero initial stock
    async fn create_variants(
        &self,
        product_id: &str,
        variants: &[Variant],
    ) -> Result<(), ImportError>;

    /// Link an existing product to a category
    async fn link_category(&self, product_id: &str, category_id: &str)
        -> Result<(), ImportError>;
}
