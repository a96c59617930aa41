//! Stress (force per area) units.
//!
//! The canonical scaling unit is [`PASCAL`] (`N/m²`).
//!
//! ```rust
//! use structunits_core::stress::{self, PSI};
//!
//! let fy = stress::ksi(50.0);
//! assert!((fy.value_in(&PSI).unwrap() - 50_000.0).abs() < 1e-6);
//! ```

use super::{METERS_PER_FOOT, METERS_PER_INCH, NEWTONS_PER_KIP, NEWTONS_PER_POUND};
use crate::{Dimension, Quantity, Unit};

const IN2: f64 = METERS_PER_INCH * METERS_PER_INCH;
const FT2: f64 = METERS_PER_FOOT * METERS_PER_FOOT;

/// Pound per square inch.
pub const PSI: Unit = Unit::new(
    "psi",
    "pounds per square inch",
    Dimension::STRESS,
    NEWTONS_PER_POUND / IN2,
);
/// Kip per square inch.
pub const KSI: Unit = Unit::new(
    "ksi",
    "kips per square inch",
    Dimension::STRESS,
    NEWTONS_PER_KIP / IN2,
);
/// Pound per square foot.
pub const PSF: Unit = Unit::new(
    "psf",
    "pounds per square foot",
    Dimension::STRESS,
    NEWTONS_PER_POUND / FT2,
);
/// Kip per square foot.
pub const KSF: Unit = Unit::new(
    "ksf",
    "kips per square foot",
    Dimension::STRESS,
    NEWTONS_PER_KIP / FT2,
);
/// Pascal.
pub const PASCAL: Unit = Unit::new("Pa", "pascal", Dimension::STRESS, 1.0);
/// Kilopascal.
pub const KILOPASCAL: Unit = Unit::new("kPa", "kilopascal", Dimension::STRESS, 1e3);
/// Megapascal (`N/mm²`).
pub const MEGAPASCAL: Unit = Unit::new("MPa", "megapascal", Dimension::STRESS, 1e6);

/// Every built-in stress unit.
pub static ALL: [Unit; 7] = [PSI, KSI, PSF, KSF, PASCAL, KILOPASCAL, MEGAPASCAL];

/// A stress in psi.
pub fn psi(value: f64) -> Quantity {
    Quantity::new(value, PSI)
}

/// A stress in ksi.
pub fn ksi(value: f64) -> Quantity {
    Quantity::new(value, KSI)
}

/// A stress in psf.
pub fn psf(value: f64) -> Quantity {
    Quantity::new(value, PSF)
}

/// A stress in pascals.
pub fn pascals(value: f64) -> Quantity {
    Quantity::new(value, PASCAL)
}

/// A stress in megapascals.
pub fn megapascals(value: f64) -> Quantity {
    Quantity::new(value, MEGAPASCAL)
}
