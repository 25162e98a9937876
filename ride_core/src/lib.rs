//! # ride_core - Amusement Ride Selection Engine
//!
//! `ride_core` holds the logic behind the ride selector: reading ride
//! dimensions out of free-text catalog fields, filtering a catalog against
//! venue constraints, sorting rides into navigation categories, and
//! projecting the return on a ride investment.
//!
//! Every computation is a pure function over catalog data. All inputs and
//! outputs are JSON-serializable so the same types back the CLI, saved
//! catalogs and any front end that embeds the crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use ride_core::catalog::{prepare_catalog, CatalogItem, Lang, LocalizedText};
//! use ride_core::constraints::{filter_catalog, SpaceConstraints};
//!
//! let item = CatalogItem::new(
//!     LocalizedText::new("Happy Carousel", "欢乐旋转木马"),
//!     LocalizedText::new("Family Ride", "家庭游乐设备"),
//! )
//! .with_dimensions(
//!     LocalizedText::new("H: 6.5m", "高度: 6.5米"),
//!     LocalizedText::new("D10M", "直径10米"),
//! );
//!
//! let catalog = prepare_catalog(vec![item]);
//! let constraints = SpaceConstraints {
//!     max_ceiling_height: Some(8.0),
//!     ..Default::default()
//! };
//! let outcome = filter_catalog(&catalog, &constraints, Lang::En);
//! assert_eq!(outcome.summary(Lang::En), "Showing 1 / 1 products");
//! ```
//!
//! ## Modules
//!
//! - [`dimensions`] - Height and footprint extraction from descriptive text
//! - [`constraints`] - Venue constraint matching and catalog filtering
//! - [`categories`] - Keyword classifier and sub-category directory
//! - [`catalog`] - Catalog item model, profiles and JSON loading
//! - [`finance`] - ROI projection and capacity-based revenue estimate
//! - [`report`] - Localized plain-text report export
//! - [`units`] - Type-safe length wrappers
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod categories;
pub mod constraints;
pub mod dimensions;
pub mod errors;
pub mod finance;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use catalog::{load_catalog, prepare_catalog, CatalogItem, Lang, PreparedItem};
pub use categories::{CategoryAssignment, MainCategory};
pub use constraints::{filter_catalog, SpaceConstraints};
pub use errors::{RideError, RideResult};
pub use finance::{project, FinancialInputs, FinancialResult};
