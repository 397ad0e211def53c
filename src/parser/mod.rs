//! Bulk product-name / variant parser.
//!
//! Takes pasted tab-or-double-space-delimited "Name + Price" lines, infers a
//! canonical base product name and a variant size token per line, and groups
//! variants under their base product in first-seen order. Pure and
//! allocation-only; malformed lines are dropped silently (fail open), with an
//! itemized skip list available through [`parse_with_report`].

mod patterns;
mod rules;

pub use rules::{extract_size, SizeRule, SizeSplit, DEFAULT_SIZE, RULES};

use std::collections::HashMap;

use crate::model::{ParseReport, ParsedProduct, SkipReason, SkippedLine, Variant};

/// Non-empty trimmed lines of the pasted text, in original order.
fn tokenize_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Split one trimmed line at the last tab, or failing that the last run of
/// two spaces. Single spaces inside the name are never the delimiter.
///
/// Returns the trimmed full name and the price, or the reason the line is
/// dropped. The price must parse as a finite, non-negative number.
fn split_name_price(line: &str) -> Result<(String, f64), SkipReason> {
    let (name, price_text) = if let Some(idx) = line.rfind('\t') {
        (&line[..idx], &line[idx + 1..])
    } else if let Some(idx) = line.rfind("  ") {
        (&line[..idx], &line[idx + 2..])
    } else {
        return Err(SkipReason::NoDelimiter);
    };

    let price: f64 = price_text
        .trim()
        .parse()
        .map_err(|_| SkipReason::BadPrice)?;
    if !price.is_finite() || price < 0.0 {
        return Err(SkipReason::BadPrice);
    }

    Ok((name.trim().to_string(), price))
}

/// Derive a SKU from the original (pre-split) product name: uppercase,
/// whitespace runs become a single hyphen, everything outside `[A-Z0-9-]`
/// is stripped.
pub fn derive_sku(full_name: &str) -> String {
    let upper = full_name.to_uppercase();
    let hyphenated = patterns::WHITESPACE_RUN_RE.replace_all(&upper, "-");
    hyphenated
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Parse pasted product text into grouped products plus skip diagnostics.
///
/// The product list is identical to [`parse_product_data`]; the skip list
/// records each dropped line (1-based over the non-blank lines) so callers
/// can explain a count mismatch instead of watching lines vanish.
pub fn parse_with_report(raw: &str) -> ParseReport {
    let mut products: Vec<ParsedProduct> = Vec::new();
    // Explicit list-plus-index map so first-seen base-name order survives.
    let mut by_name: HashMap<String, usize> = HashMap::new();
    let mut skipped: Vec<SkippedLine> = Vec::new();

    for (idx, line) in tokenize_lines(raw).enumerate() {
        let (full_name, price) = match split_name_price(line) {
            Ok(entry) => entry,
            Err(reason) => {
                skipped.push(SkippedLine {
                    line: idx + 1,
                    text: line.to_string(),
                    reason,
                });
                continue;
            }
        };

        // SKU comes from the full pre-split name, not the base name.
        let sku = derive_sku(&full_name);
        let SizeSplit { base_name, size } = extract_size(&full_name);
        let variant = Variant { size, price, sku };

        match by_name.get(&base_name) {
            Some(&slot) => products[slot].variants.push(variant),
            None => {
                by_name.insert(base_name.clone(), products.len());
                products.push(ParsedProduct {
                    name: base_name,
                    variants: vec![variant],
                });
            }
        }
    }

    ParseReport { products, skipped }
}

/// Parse pasted product text into grouped products.
///
/// Malformed lines (no delimiter, bad price) contribute nothing; use
/// [`parse_with_report`] when the caller needs to know which ones.
pub fn parse_product_data(raw: &str) -> Vec<ParsedProduct> {
    parse_with_report(raw).products
}
