//! Force per length units (distributed line loads).
//!
//! The canonical scaling unit is [`NEWTON_PER_METER`]. `1 N/mm == 1 kN/m`; composition resolves that scale to
//! `kN/m`.

use super::{METERS_PER_FOOT, METERS_PER_INCH, NEWTONS_PER_KIP, NEWTONS_PER_POUND};
use crate::{Dimension, Quantity, Unit};

/// Pound per inch.
pub const POUND_PER_INCH: Unit = Unit::new(
    "lb/in",
    "pound per inch",
    Dimension::FORCE_PER_LENGTH,
    NEWTONS_PER_POUND / METERS_PER_INCH,
);
/// Pound per foot.
pub const POUND_PER_FOOT: Unit = Unit::new(
    "lb/ft",
    "pound per foot",
    Dimension::FORCE_PER_LENGTH,
    NEWTONS_PER_POUND / METERS_PER_FOOT,
);
/// Kip per inch.
pub const KIP_PER_INCH: Unit = Unit::new(
    "k/in",
    "kip per inch",
    Dimension::FORCE_PER_LENGTH,
    NEWTONS_PER_KIP / METERS_PER_INCH,
);
/// Kip per foot.
pub const KIP_PER_FOOT: Unit = Unit::new(
    "k/ft",
    "kip per foot",
    Dimension::FORCE_PER_LENGTH,
    NEWTONS_PER_KIP / METERS_PER_FOOT,
);
/// Newton per metre.
pub const NEWTON_PER_METER: Unit =
    Unit::new("N/m", "newton per meter", Dimension::FORCE_PER_LENGTH, 1.0);
/// Kilonewton per metre.
pub const KILONEWTON_PER_METER: Unit =
    Unit::new("kN/m", "kilonewton per meter", Dimension::FORCE_PER_LENGTH, 1e3);
/// Newton per millimetre.
pub const NEWTON_PER_MILLIMETER: Unit =
    Unit::new("N/mm", "newton per millimeter", Dimension::FORCE_PER_LENGTH, 1e3);
/// Kilonewton per millimetre.
pub const KILONEWTON_PER_MILLIMETER: Unit = Unit::new(
    "kN/mm",
    "kilonewton per millimeter",
    Dimension::FORCE_PER_LENGTH,
    1e6,
);
/// Newton per centimetre.
pub const NEWTON_PER_CENTIMETER: Unit =
    Unit::new("N/cm", "newton per centimeter", Dimension::FORCE_PER_LENGTH, 1e2);
/// Kilonewton per centimetre.
pub const KILONEWTON_PER_CENTIMETER: Unit = Unit::new(
    "kN/cm",
    "kilonewton per centimeter",
    Dimension::FORCE_PER_LENGTH,
    1e5,
);

/// Every built-in force per length unit.
pub static ALL: [Unit; 10] = [
    POUND_PER_INCH,
    POUND_PER_FOOT,
    KIP_PER_INCH,
    KIP_PER_FOOT,
    NEWTON_PER_METER,
    KILONEWTON_PER_METER,
    NEWTON_PER_MILLIMETER,
    KILONEWTON_PER_MILLIMETER,
    NEWTON_PER_CENTIMETER,
    KILONEWTON_PER_CENTIMETER,
];

/// A line load in pounds per foot.
pub fn pounds_per_foot(value: f64) -> Quantity {
    Quantity::new(value, POUND_PER_FOOT)
}

/// A line load in kips per foot.
pub fn kips_per_foot(value: f64) -> Quantity {
    Quantity::new(value, KIP_PER_FOOT)
}

/// A line load in kips per inch.
pub fn kips_per_inch(value: f64) -> Quantity {
    Quantity::new(value, KIP_PER_INCH)
}

/// A line load in kilonewtons per metre.
pub fn kilonewtons_per_meter(value: f64) -> Quantity {
    Quantity::new(value, KILONEWTON_PER_METER)
}
