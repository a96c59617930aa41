//! Core types for structural-engineering quantities.
//!
//! `structunits-core` provides a small runtime units model:
//!
//! - A [`Dimension`] is a triple of force, length and time exponents.
//! - A [`Unit`] is a symbol plus a scale factor to the SI base unit of its dimension.
//! - A [`Quantity`] pairs an `f64` magnitude with a [`Unit`].
//! - Conversion, addition and comparison require matching dimensions and report [`UnitsError::DimensionMismatch`]
//!   otherwise. Multiplication and division compose dimensions (`L × L → L^2`, `F / L^2 → stress`).
//!
//! Most users should depend on `structunits` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Runtime separation of dimensions (you can't add inches to square inches).
//! - Automatic unit reconciliation: `10 in + 1 ft = 22 in`.
//! - Readable composite units: `kip × ft` is `k-ft`, `lb / in²` is `psi`.
//! - Extension units and aliases at runtime via [`UnitRegistry`] and [`UnitsConfig`].
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`; equality uses per-dimension tolerances).
//! - Affine units such as temperature scales.
//!
//! # Quick start
//!
//! ```rust
//! use structunits_core::{area, force, length, stress};
//!
//! let width = length::inches(10.0);
//! let sum = width.add(&length::feet(1.0)).unwrap();
//! assert!((sum.value() - 22.0).abs() < 1e-9);
//!
//! let a = width.multiply_by(&length::inches(10.0)).unwrap();
//! assert_eq!(a.unit(), &area::SQUARE_INCH);
//!
//! let f = force::kips(25.0).divide_by(&a).unwrap();
//! assert_eq!(f.unit(), &stress::KSI);
//! assert_eq!(f.to_display_string(), "0.25 ksi");
//! ```
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`] with a [`UnitsError`]; nothing in this crate panics on bad input.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod config;
mod dimension;
mod error;
mod quantity;
mod registry;
mod unit;

/// Min, max and absolute-value envelopes over quantities.
pub mod envelope;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use config::{DisplaySettings, UnitDefinition, UnitsConfig};
pub use dimension::{Dimension, DimensionKind};
pub use error::{Result, UnitsError};
pub use quantity::Quantity;
pub use registry::UnitRegistry;
pub use unit::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
pub mod units;

pub use units::area;
pub use units::force;
pub use units::force_per_length;
pub use units::length;
pub use units::length_cubed;
pub use units::length_to_the_4th;
pub use units::moment;
pub use units::stress;
pub use units::time;
pub use units::unitless;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_and_sync() {
        assert_send_sync::<Dimension>();
        assert_send_sync::<Unit>();
        assert_send_sync::<Quantity>();
        assert_send_sync::<UnitRegistry>();
        assert_send_sync::<UnitsConfig>();
        assert_send_sync::<UnitsError>();
    }

    #[test]
    fn quantities_are_not_mutated_by_operations() {
        let a = length::feet(2.0);
        let _ = a.add(&length::inches(6.0)).unwrap();
        let _ = a.multiply(3.0);
        let _ = a.powi(2).unwrap();
        assert_eq!(a.value(), 2.0);
        assert_eq!(a.unit(), &length::FOOT);
    }

    #[test]
    fn dimension_kinds_of_composed_quantities() {
        let i = length::inches(2.0).powi(4).unwrap();
        assert_eq!(i.dimension().kind(), DimensionKind::LengthToThe4th);
        let ei = stress::ksi(29_000.0).multiply_by(&i).unwrap();
        assert_eq!(ei.dimension().kind(), DimensionKind::FlexuralStiffness);
        let w = force::kips(1.0).divide_by(&length_cubed::cubic_feet(1.0)).unwrap();
        assert_eq!(w.dimension().kind(), DimensionKind::Density);
    }
}
