use serde::Serialize;

/// One size/price/SKU combination belonging to a base product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    pub size: String,
    pub price: f64,
    pub sku: String,
}

/// A base product with the variants grouped under it, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedProduct {
    pub name: String,
    pub variants: Vec<Variant>,
}

/// Why a pasted line contributed nothing to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Neither a tab nor a double-space delimiter was found.
    NoDelimiter,
    /// The segment after the delimiter did not parse as a finite,
    /// non-negative number.
    BadPrice,
}

/// Diagnostic record for a dropped line. Line numbers are 1-based and count
/// every non-blank pasted line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLine {
    pub line: usize,
    pub text: String,
    pub reason: SkipReason,
}

/// Full parse result: the products plus an itemized list of dropped lines.
///
/// `products` is exactly what [`crate::parse_product_data`] returns; the
/// skip list is additive diagnostics, not a behavior change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseReport {
    pub products: Vec<ParsedProduct>,
    pub skipped: Vec<SkippedLine>,
}

impl ParseReport {
    /// Total number of variants across all products.
    pub fn variant_count(&self) -> usize {
        self.products.iter().map(|p| p.variants.len()).sum()
    }
}

/// Payload for a create-product call against the catalog backend.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub code: String,
    pub status: String,
}

/// What actually landed after a best-effort import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub products_created: usize,
    pub variants_created: usize,
    /// Names of products whose create call failed outright.
    pub failed_products: Vec<String>,
    /// Names of products that were created but whose variant batch or
    /// category link failed. Partial writes are an accepted failure mode.
    pub partial_products: Vec<String>,
}
