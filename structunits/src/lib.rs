//! Unit-aware quantities for structural engineering.
//!
//! `structunits` is the user-facing crate in this workspace. It re-exports the full API from `structunits-core`,
//! the built-in unit modules and a [`prelude`].
//!
//! A value is always a [`Quantity`]: an `f64` magnitude paired with a [`Unit`]. The unit carries a [`Dimension`]
//! (force, length and time exponents) and a scale to the SI base unit of that dimension, so quantities in different
//! units of the same dimension combine freely while mixing dimensions is an error.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add inches to kips).
//! - Reconciles units automatically: the right operand is converted into the left operand's unit.
//! - Names composite units the way engineers write them (`k-ft`, `psi`, `in⁴`).
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: quantities are backed by `f64` and compare with per-dimension tolerances.
//! - Typesetting (LaTeX) or localized number formatting.
//!
//! # Quick start
//!
//! ```rust
//! use structunits::prelude::*;
//!
//! let span = feet(20.0);
//! let load = kips_per_foot(1.5);
//!
//! // w L² / 8
//! let m = load.multiply_by(&span.powi(2).unwrap()).unwrap().divide(8.0).unwrap();
//! assert_eq!(m.unit(), &KIP_FOOT);
//! assert!((m.value() - 75.0).abs() < 1e-9);
//!
//! let sum = inches(10.0).add(&feet(1.0)).unwrap();
//! assert_eq!(sum.unit(), &INCH);
//! assert_eq!(format!("{sum:.1}"), "22.0 in");
//! ```
//!
//! # Incorrect usage (runtime error)
//!
//! ```rust
//! use structunits::prelude::*;
//!
//! let err = inches(1.0).add(&square_inches(1.0)).unwrap_err();
//! assert!(matches!(err, UnitsError::DimensionMismatch { .. }));
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension (also available from the crate root):
//!
//! - `structunits::length` (in, ft, mm, cm, m)
//! - `structunits::area`, `structunits::length_cubed`, `structunits::length_to_the_4th`
//! - `structunits::force` (lb, kip, N, kN)
//! - `structunits::moment` (lb-in, k-ft, kN-m, …)
//! - `structunits::force_per_length` (lb/ft, k/ft, kN/m, …)
//! - `structunits::stress` (psi, ksi, psf, ksf, Pa, kPa, MPa)
//! - `structunits::time` (s, min, h)
//! - `structunits::unitless`
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use structunits_core::*;

pub use structunits_core::units::area;
pub use structunits_core::units::force;
pub use structunits_core::units::force_per_length;
pub use structunits_core::units::length;
pub use structunits_core::units::length_cubed;
pub use structunits_core::units::length_to_the_4th;
pub use structunits_core::units::moment;
pub use structunits_core::units::stress;
pub use structunits_core::units::time;
pub use structunits_core::units::unitless;

/// Common imports: the core types plus every unit constant and shorthand constructor.
pub mod prelude {
    pub use structunits_core::envelope::{
        abs_envelope, abs_envelope_of, max_of, min_of, signed_abs_envelope,
    };
    pub use structunits_core::{
        Dimension, DimensionKind, DisplaySettings, Quantity, Unit, UnitRegistry, UnitsConfig,
        UnitsError,
    };

    pub use structunits_core::area::{
        square_centimeters, square_feet, square_inches, square_meters, square_millimeters,
        SQUARE_CENTIMETER, SQUARE_FOOT, SQUARE_INCH, SQUARE_METER, SQUARE_MILLIMETER,
    };
    pub use structunits_core::force::{
        kilonewtons, kips, newtons, pounds, KILONEWTON, KIP, NEWTON, POUND,
    };
    pub use structunits_core::force_per_length::{
        kilonewtons_per_meter, kips_per_foot, kips_per_inch, pounds_per_foot, KILONEWTON_PER_METER,
        KIP_PER_FOOT, KIP_PER_INCH, NEWTON_PER_METER, POUND_PER_FOOT, POUND_PER_INCH,
    };
    pub use structunits_core::length::{
        centimeters, feet, inches, meters, millimeters, CENTIMETER, FOOT, INCH, METER, MILLIMETER,
    };
    pub use structunits_core::length_cubed::{
        cubic_feet, cubic_inches, cubic_meters, cubic_millimeters, CUBIC_FOOT, CUBIC_INCH,
        CUBIC_METER, CUBIC_MILLIMETER,
    };
    pub use structunits_core::length_to_the_4th::{
        feet_to_the_4th, inches_to_the_4th, millimeters_to_the_4th, FOOT_TO_THE_4TH,
        INCH_TO_THE_4TH, METER_TO_THE_4TH, MILLIMETER_TO_THE_4TH,
    };
    pub use structunits_core::moment::{
        kilonewton_meters, kip_feet, kip_inches, newton_meters, pound_inches, KILONEWTON_METER,
        KIP_FOOT, KIP_INCH, NEWTON_METER, POUND_FOOT, POUND_INCH,
    };
    pub use structunits_core::stress::{
        ksi, megapascals, pascals, psf, psi, KILOPASCAL, KSF, KSI, MEGAPASCAL, PASCAL, PSF, PSI,
    };
    pub use structunits_core::time::{hours, minutes, seconds, HOUR, MINUTE, SECOND};
    pub use structunits_core::unitless::{unitless, UNITLESS};
}
