//! # Unit Types
//!
//! Lightweight newtypes for the lengths that show up in ride spec sheets.
//! Everything downstream of the dimension parser works in meters; feet only
//! appear as an input unit on a handful of imported height strings.
//!
//! ## Example
//!
//! ```rust
//! use ride_core::units::{Feet, Meters};
//!
//! let height: Meters = Feet(15.0).into();
//! assert!((height.value() - 4.572).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Meters per international foot
pub const METERS_PER_FOOT: f64 = 0.3048;

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in feet, only ever converted into [`Meters`]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

impl From<Feet> for Meters {
    fn from(ft: Feet) -> Self {
        Meters(ft.0 * METERS_PER_FOOT)
    }
}

impl Meters {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}
