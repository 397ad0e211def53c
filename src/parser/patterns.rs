//! Compiled patterns for size-token detection.
//!
//! All regexes are case-insensitive and compiled once. The unit vocabulary
//! is the one the storefront catalog actually uses: ml, L, cm, mm, inch,
//! gsm, and NxM[xP] dimension tokens.

use regex::Regex;
use std::sync::LazyLock;

/// `<prefix ending in "Foam Pad"> <N[.N]>Inch (<qualifier>)`.
/// The parenthetical qualifier is discarded from both base name and size.
pub static FOAM_PAD_INCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*foam pad)\s+(\d+(?:\.\d+)?inch)\s*\(.*\)$").expect("valid regex")
});

/// `Lambswool Pad Short <N[.N]>Inch (<qualifier>)`.
pub static LAMBSWOOL_SHORT_INCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(lambswool pad short)\s+(\d+(?:\.\d+)?inch)\s*\(.*\)$").expect("valid regex")
});

/// `Lambswool Pad <N>mm`.
pub static LAMBSWOOL_MM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(lambswool pad)\s+(\d+mm)$").expect("valid regex")
});

/// `Polishing & Sealing Foam Pad <N[.N]>Inch (<qualifier>)`.
pub static POLISHING_FOAM_INCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(polishing\s*&\s*sealing foam pad)\s+(\d+(?:\.\d+)?inch)\s*\(.*\)$")
        .expect("valid regex")
});

/// Generic unit token, found anywhere in the name as long as it starts on a
/// word boundary: `N<unit>`, dimension `NxM[xP][cm|mm]`, `Ngsm`, or a
/// parenthetical-qualified `[Short ]Ninch(...)` form.
pub static GENERIC_UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        \b(?:short\s+)?\d+(?:\.\d+)?\s*inch\s*\([^)]*\)   # Short 4inch(soft) / 6Inch(firm)
        | \b\d+(?:\.\d+)?\s?(?:ml|l|cm|mm|inch)\b          # 500ml, 1L, 150mm, 6Inch
        | \b\d+\s*x\s*\d+(?:\s*x\s*\d+)?(?:\s*(?:cm|mm))?\b # 40X40cm, 10X20, 5x5x5mm
        | \b\d+\s?gsm\b                                    # 350gsm
        ",
    )
    .expect("valid regex")
});

/// Stricter fallback: a unit token at the very end of the string, with no
/// word-boundary requirement in front (catches names glued to the size,
/// e.g. `Cleaner500ml`).
pub static TRAILING_UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+(?:\.\d+)?\s?(?:ml|l|cm|mm|inch)$").expect("valid regex")
});

/// Runs of whitespace, for SKU hyphenation.
pub static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
