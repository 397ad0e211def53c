//! Sequential best-effort submission of parsed products.
//!
//! One product insert, then the dependent variant batch and category link,
//! with no concurrency, batching across products, rollback, or retry. A
//! failure is logged and the loop proceeds to the next product.

use log::{error, info};

use crate::backend::ProductStore;
use crate::model::{ImportSummary, NewProduct, ParsedProduct};
use crate::parser::derive_sku;

/// Submit parsed products to the backend, linking each to `category_id`.
///
/// Returns what actually landed; `failed_products` and `partial_products`
/// carry the names the caller should surface. Never errors as a whole run.
pub async fn submit_products(
    store: &dyn ProductStore,
    products: &[ParsedProduct],
    category_id: &str,
    default_status: &str,
) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for product in products {
        let new_product = NewProduct {
            name: product.name.clone(),
            // Product code uses the same derivation as variant SKUs.
            code: derive_sku(&product.name),
            status: default_status.to_string(),
        };

        let product_id = match store.create_product(&new_product).await {
            Ok(id) => id,
            Err(err) => {
                error!(
                    "Failed to create product '{}' on {}: {}",
                    product.name,
                    store.store_name(),
                    err
                );
                summary.failed_products.push(product.name.clone());
                continue;
            }
        };
        summary.products_created += 1;

        let mut partial = false;

        match store.create_variants(&product_id, &product.variants).await {
            Ok(()) => summary.variants_created += product.variants.len(),
            Err(err) => {
                error!(
                    "Failed to create variants for '{}' (id {}): {}",
                    product.name, product_id, err
                );
                partial = true;
            }
        }

        if let Err(err) = store.link_category(&product_id, category_id).await {
            error!(
                "Failed to link '{}' (id {}) to category {}: {}",
                product.name, product_id, category_id, err
            );
            partial = true;
        }

        if partial {
            summary.partial_products.push(product.name.clone());
        }
    }

    info!(
        "Import finished: {} products and {} variants created, {} failed, {} partial",
        summary.products_created,
        summary.variants_created,
        summary.failed_products.len(),
        summary.partial_products.len()
    );

    summary
}
