//! # Venue Constraints
//!
//! Decides whether a ride fits a venue described by its ceiling height,
//! largest usable span and indoor/outdoor setting.
//!
//! Fit checks are conservative: if a limit is set and the ride's dimension
//! cannot be read, the ride is excluded rather than shown as fitting.
//! A dimension equal to the limit fits.
//!
//! ## Example
//!
//! ```rust
//! use ride_core::constraints::product_fits_constraints;
//!
//! assert!(product_fits_constraints("5.9 m", "D12M*H5.9M", Some(5.9), None));
//! assert!(!product_fits_constraints("5.9 m", "D12M*H5.9M", None, Some(10.0)));
//! assert!(!product_fits_constraints("N/A", "D12M*H5.9M", Some(20.0), None));
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, Lang, PreparedItem, VenueType};
use crate::dimensions::{parse_footprint, parse_height};

/// Check a ride's height and footprint text against optional limits in meters.
///
/// `None` means no limit on that axis; with no limits every ride fits.
pub fn product_fits_constraints(
    height_text: &str,
    footprint_text: &str,
    max_ceiling_height: Option<f64>,
    max_footprint: Option<f64>,
) -> bool {
    if max_ceiling_height.is_none() && max_footprint.is_none() {
        return true;
    }

    if let Some(limit) = max_ceiling_height {
        match parse_height(height_text) {
            Some(height) if height.value() > limit => return false,
            Some(_) => {}
            None => return false,
        }
    }

    if let Some(limit) = max_footprint {
        match parse_footprint(footprint_text) {
            Some(footprint) if footprint.value() > limit => return false,
            Some(_) => {}
            None => return false,
        }
    }

    true
}

/// Check a ride's declared venue type against a requested one.
///
/// Rides declared `Both` match any request; rides without a declared venue
/// type only match when nothing is requested.
pub fn venue_matches(item_venue: Option<VenueType>, requested: Option<VenueType>) -> bool {
    match (requested, item_venue) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(wanted), Some(declared)) => declared == wanted || declared == VenueType::Both,
    }
}

/// Venue limits supplied by the user. Every field is optional.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpaceConstraints {
    /// Maximum vertical clearance in meters
    pub max_ceiling_height: Option<f64>,
    /// Largest unobstructed span in meters
    pub max_footprint: Option<f64>,
    pub venue_type: Option<VenueType>,
}

impl SpaceConstraints {
    pub fn is_empty(&self) -> bool {
        self.max_ceiling_height.is_none() && self.max_footprint.is_none() && self.venue_type.is_none()
    }

    /// Check one item, reading its dimension strings in `lang`.
    pub fn matches(&self, item: &CatalogItem, lang: Lang) -> bool {
        product_fits_constraints(
            item.height.get(lang),
            item.footprint.get(lang),
            self.max_ceiling_height,
            self.max_footprint,
        ) && venue_matches(item.venue_type, self.venue_type)
    }
}

/// Items that passed the filter, with the counts shown as "N / M".
#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome<'a> {
    pub matches: Vec<&'a PreparedItem>,
    pub total: usize,
}

impl FilterOutcome<'_> {
    pub fn shown(&self) -> usize {
        self.matches.len()
    }

    pub fn summary(&self, lang: Lang) -> String {
        match lang {
            Lang::En => format!("Showing {} / {} products", self.shown(), self.total),
            Lang::Zh => format!("显示 {} / {} 个产品", self.shown(), self.total),
        }
    }
}

/// Filter prepared catalog items against a set of venue constraints.
pub fn filter_catalog<'a>(
    items: &'a [PreparedItem],
    constraints: &SpaceConstraints,
    lang: Lang,
) -> FilterOutcome<'a> {
    let matches: Vec<&PreparedItem> = items
        .iter()
        .filter(|p| constraints.matches(&p.item, lang))
        .collect();

    tracing::debug!(
        shown = matches.len(),
        total = items.len(),
        ?constraints,
        "filtered catalog"
    );

    FilterOutcome {
        matches,
        total: items.len(),
    }
}
