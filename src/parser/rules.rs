use log::trace;
use regex::{Match, Regex};

use super::patterns;

/// Size applied when no rule recognizes a measurement token.
pub const DEFAULT_SIZE: &str = "Standard";

/// Result of splitting a full product name into base name and size token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSplit {
    pub base_name: String,
    pub size: String,
}

/// A single size-extraction rule.
///
/// Rules are evaluated in the fixed order of [`RULES`] and the first match
/// wins; product-family rules come before the generic unit patterns so a
/// family name boundary is never mis-captured by the broader pattern.
pub trait SizeRule: Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, full_name: &str) -> Option<SizeSplit>;
}

/// Rule 1: foam pads with inch sizes and a parenthetical qualifier.
pub struct FoamPadInch;

/// Rule 2: short lambswool pads with inch sizes.
pub struct LambswoolShortInch;

/// Rule 3: lambswool pads with millimeter sizes.
pub struct LambswoolMm;

/// Rule 4: polishing & sealing foam pads with inch sizes.
pub struct PolishingFoamPadInch;

/// Rule 5: generic unit token anywhere in the name.
pub struct GenericUnit;

/// Rule 6: unit token at the very end of the name.
pub struct TrailingUnit;

/// The ordered rule list. Order is significant.
pub static RULES: &[&dyn SizeRule] = &[
    &FoamPadInch,
    &LambswoolShortInch,
    &LambswoolMm,
    &PolishingFoamPadInch,
    &GenericUnit,
    &TrailingUnit,
];

/// Split `full_name` into base name and size token using the first matching
/// rule; falls back to the full name with size [`DEFAULT_SIZE`].
pub fn extract_size(full_name: &str) -> SizeSplit {
    for rule in RULES {
        if let Some(split) = rule.apply(full_name) {
            trace!("size rule {} matched '{}'", rule.name(), full_name);
            return split;
        }
    }
    SizeSplit {
        base_name: full_name.to_string(),
        size: DEFAULT_SIZE.to_string(),
    }
}

/// Anchored family patterns capture `(base)(size)`; the qualifier, if any,
/// is dropped from both.
fn from_captures(re: &Regex, full_name: &str) -> Option<SizeSplit> {
    let caps = re.captures(full_name)?;
    Some(SizeSplit {
        base_name: caps.get(1)?.as_str().trim().to_string(),
        size: caps.get(2)?.as_str().to_string(),
    })
}

/// Unit patterns keep whatever surrounds the matched token: the size is the
/// match itself and the base name is the full name with the match spliced
/// out and only its ends trimmed. Interior spacing or punctuation artifacts
/// are left alone on purpose; downstream display relies on them as-is.
fn splice_out(full_name: &str, m: Match<'_>) -> SizeSplit {
    let mut base = String::with_capacity(full_name.len());
    base.push_str(&full_name[..m.start()]);
    base.push_str(&full_name[m.end()..]);
    SizeSplit {
        base_name: base.trim().to_string(),
        size: m.as_str().to_string(),
    }
}

impl SizeRule for FoamPadInch {
    fn name(&self) -> &'static str {
        "foam_pad_inch"
    }

    fn apply(&self, full_name: &str) -> Option<SizeSplit> {
        from_captures(&patterns::FOAM_PAD_INCH_RE, full_name)
    }
}

impl SizeRule for LambswoolShortInch {
    fn name(&self) -> &'static str {
        "lambswool_short_inch"
    }

    fn apply(&self, full_name: &str) -> Option<SizeSplit> {
        from_captures(&patterns::LAMBSWOOL_SHORT_INCH_RE, full_name)
    }
}

impl SizeRule for LambswoolMm {
    fn name(&self) -> &'static str {
        "lambswool_mm"
    }

    fn apply(&self, full_name: &str) -> Option<SizeSplit> {
        from_captures(&patterns::LAMBSWOOL_MM_RE, full_name)
    }
}

impl SizeRule for PolishingFoamPadInch {
    fn name(&self) -> &'static str {
        "polishing_foam_pad_inch"
    }

    fn apply(&self, full_name: &str) -> Option<SizeSplit> {
        from_captures(&patterns::POLISHING_FOAM_INCH_RE, full_name)
    }
}

impl SizeRule for GenericUnit {
    fn name(&self) -> &'static str {
        "generic_unit"
    }

    fn apply(&self, full_name: &str) -> Option<SizeSplit> {
        patterns::GENERIC_UNIT_RE
            .find(full_name)
            .map(|m| splice_out(full_name, m))
    }
}

impl SizeRule for TrailingUnit {
    fn name(&self) -> &'static str {
        "trailing_unit"
    }

    fn apply(&self, full_name: &str) -> Option<SizeSplit> {
        patterns::TRAILING_UNIT_RE
            .find(full_name)
            .map(|m| splice_out(full_name, m))
    }
}
