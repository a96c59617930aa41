//! Moment (force × length) units.
//!
//! Symbols follow structural drafting practice: `lb-in`, `k-ft`, `kN-m`. The canonical scaling unit is
//! [`NEWTON_METER`]. Note that `1 kN-mm == 1 N-m`; composition resolves that scale to `N-m` because it is listed
//! first.

use super::{METERS_PER_FOOT, METERS_PER_INCH, NEWTONS_PER_KIP, NEWTONS_PER_POUND};
use crate::{Dimension, Quantity, Unit};

/// Pound-inch.
pub const POUND_INCH: Unit = Unit::new(
    "lb-in",
    "pound-inch",
    Dimension::MOMENT,
    NEWTONS_PER_POUND * METERS_PER_INCH,
);
/// Pound-foot.
pub const POUND_FOOT: Unit = Unit::new(
    "lb-ft",
    "pound-foot",
    Dimension::MOMENT,
    NEWTONS_PER_POUND * METERS_PER_FOOT,
);
/// Kip-inch.
pub const KIP_INCH: Unit = Unit::new(
    "k-in",
    "kip-inch",
    Dimension::MOMENT,
    NEWTONS_PER_KIP * METERS_PER_INCH,
);
/// Kip-foot.
pub const KIP_FOOT: Unit = Unit::new(
    "k-ft",
    "kip-foot",
    Dimension::MOMENT,
    NEWTONS_PER_KIP * METERS_PER_FOOT,
);
/// Newton-metre.
pub const NEWTON_METER: Unit = Unit::new("N-m", "newton-meter", Dimension::MOMENT, 1.0);
/// Kilonewton-metre.
pub const KILONEWTON_METER: Unit = Unit::new("kN-m", "kilonewton-meter", Dimension::MOMENT, 1e3);
/// Newton-millimetre.
pub const NEWTON_MILLIMETER: Unit =
    Unit::new("N-mm", "newton-millimeter", Dimension::MOMENT, 1e-3);
/// Kilonewton-millimetre.
pub const KILONEWTON_MILLIMETER: Unit =
    Unit::new("kN-mm", "kilonewton-millimeter", Dimension::MOMENT, 1.0);
/// Newton-centimetre.
pub const NEWTON_CENTIMETER: Unit =
    Unit::new("N-cm", "newton-centimeter", Dimension::MOMENT, 1e-2);
/// Kilonewton-centimetre.
pub const KILONEWTON_CENTIMETER: Unit =
    Unit::new("kN-cm", "kilonewton-centimeter", Dimension::MOMENT, 10.0);

/// Every built-in moment unit.
pub static ALL: [Unit; 10] = [
    POUND_INCH,
    POUND_FOOT,
    KIP_INCH,
    KIP_FOOT,
    NEWTON_METER,
    KILONEWTON_METER,
    NEWTON_MILLIMETER,
    KILONEWTON_MILLIMETER,
    NEWTON_CENTIMETER,
    KILONEWTON_CENTIMETER,
];

/// A moment in pound-inches.
pub fn pound_inches(value: f64) -> Quantity {
    Quantity::new(value, POUND_INCH)
}

/// A moment in kip-inches.
pub fn kip_inches(value: f64) -> Quantity {
    Quantity::new(value, KIP_INCH)
}

/// A moment in kip-feet.
pub fn kip_feet(value: f64) -> Quantity {
    Quantity::new(value, KIP_FOOT)
}

/// A moment in newton-metres.
pub fn newton_meters(value: f64) -> Quantity {
    Quantity::new(value, NEWTON_METER)
}

/// A moment in kilonewton-metres.
pub fn kilonewton_meters(value: f64) -> Quantity {
    Quantity::new(value, KILONEWTON_METER)
}
