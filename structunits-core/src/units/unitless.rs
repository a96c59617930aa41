//! The dimensionless unit.
//!
//! Ratios of like quantities collapse here: `feet(3.0).divide_by(&inches(6.0))` is `6` unitless.
//!
//! ```rust
//! use structunits_core::unitless::{self, UNITLESS};
//!
//! let ratio = unitless::unitless(0.85);
//! assert_eq!(ratio.unit(), &UNITLESS);
//! assert_eq!(ratio.to_display_string(), "0.85");
//! ```

use crate::{Dimension, Quantity, Unit};

/// The unit of pure numbers. Its symbol is empty.
pub const UNITLESS: Unit = Unit::new("", "unitless", Dimension::UNITLESS, 1.0);

/// The single built-in dimensionless unit.
pub static ALL: [Unit; 1] = [UNITLESS];

/// A pure number.
pub fn unitless(value: f64) -> Quantity {
    Quantity::new(value, UNITLESS)
}
