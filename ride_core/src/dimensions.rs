//! # Dimension Parsing
//!
//! Turns the free-text height and footprint strings found on ride spec
//! sheets into comparable values in meters.
//!
//! The two parsers read numbers differently:
//!
//! - **Height** takes the *first* numeric token after an optional label
//!   (`高度`, `Height`, `H`) and converts feet to meters when the text says so.
//! - **Footprint** takes the *largest* of all numeric tokens. Footprint strings
//!   pack several extents of the bounding shape (`D12M*H5.9M`,
//!   `L16M*W10.5M*H11M`), and the largest one decides whether a ride fits.
//!   Footprints are always quoted in meters, so no conversion is applied.
//!
//! Neither parser fails: text that carries no usable number yields `None`,
//! and callers treat that as "cannot be shown to fit".
//!
//! ## Example
//!
//! ```rust
//! use ride_core::dimensions::{parse_footprint, parse_height};
//!
//! assert_eq!(parse_height("11米").map(|m| m.value()), Some(11.0));
//! assert_eq!(parse_footprint("L8M*W12M*H5M").map(|m| m.value()), Some(12.0));
//! assert!(parse_height("N/A").is_none());
//! ```

use crate::units::{Feet, Meters};

/// Sentinel used by the catalog for "not specified"
const NOT_AVAILABLE: &str = "n/a";

/// Height labels, longest first so `高度` wins over `高`
const HEIGHT_LABELS: [&str; 3] = ["高度", "height", "高"];

/// Parse a ride height into meters.
///
/// Returns `None` for empty text, `N/A`, or text without a numeric token.
pub fn parse_height(text: &str) -> Option<Meters> {
    let trimmed = text.trim();
    if is_blank_or_not_available(trimmed) {
        return None;
    }

    let cleaned = strip_height_label(trimmed);
    let value = numeric_tokens(cleaned).next()?;

    let lower = cleaned.to_lowercase();
    if lower.contains("ft") || lower.contains("feet") {
        Some(Feet(value).into())
    } else {
        Some(Meters(value))
    }
}

/// Parse a ride footprint into its largest linear extent in meters.
///
/// Returns `None` for empty text, `N/A`, or text without a numeric token.
pub fn parse_footprint(text: &str) -> Option<Meters> {
    let trimmed = text.trim();
    if is_blank_or_not_available(trimmed) {
        return None;
    }

    numeric_tokens(trimmed)
        .reduce(f64::max)
        .map(Meters)
}

/// [`parse_height`] for text that may be absent.
pub fn parse_height_opt(text: Option<&str>) -> Option<Meters> {
    text.and_then(parse_height)
}

/// [`parse_footprint`] for text that may be absent.
pub fn parse_footprint_opt(text: Option<&str>) -> Option<Meters> {
    text.and_then(parse_footprint)
}

fn is_blank_or_not_available(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_AVAILABLE)
}

/// Drop a leading height label and any `:`/`：`/whitespace after it.
fn strip_height_label(text: &str) -> &str {
    let rest = HEIGHT_LABELS
        .iter()
        .find_map(|label| {
            text.get(..label.len())
                .filter(|prefix| prefix.eq_ignore_ascii_case(label))
                .map(|_| &text[label.len()..])
        })
        .or_else(|| {
            // A bare "H" only counts as a label when it is not the start of a word
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some('H' | 'h'), next) if !next.is_some_and(|c| c.is_ascii_alphabetic()) => {
                    Some(&text[1..])
                }
                _ => None,
            }
        });

    match rest {
        Some(rest) => rest.trim_start_matches(|c: char| c == ':' || c == '：' || c.is_whitespace()),
        None => text,
    }
}

/// Iterate over every `\d+(\.\d+)?` token in `text`, left to right.
fn numeric_tokens(text: &str) -> impl Iterator<Item = f64> + '_ {
    let bytes = text.as_bytes();
    let mut pos = 0;

    std::iter::from_fn(move || {
        while pos < bytes.len() && !bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos >= bytes.len() {
            return None;
        }

        let start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos + 1 < bytes.len() && bytes[pos] == b'.' && bytes[pos + 1].is_ascii_digit() {
            pos += 1;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }

        // ASCII digits and '.' only, so the slice is valid UTF-8 and always parses
        text[start..pos].parse::<f64>().ok()
    })
}
