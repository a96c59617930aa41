//! Volume-like `L³` units, used for section moduli and first moments of area.

use super::{METERS_PER_FOOT, METERS_PER_INCH};
use crate::{Dimension, Quantity, Unit};

/// Cubic inch.
pub const CUBIC_INCH: Unit = Unit::new(
    "in³",
    "cubic inch",
    Dimension::LENGTH_CUBED,
    METERS_PER_INCH * METERS_PER_INCH * METERS_PER_INCH,
);
/// Cubic foot.
pub const CUBIC_FOOT: Unit = Unit::new(
    "ft³",
    "cubic foot",
    Dimension::LENGTH_CUBED,
    METERS_PER_FOOT * METERS_PER_FOOT * METERS_PER_FOOT,
);
/// Cubic millimetre.
pub const CUBIC_MILLIMETER: Unit =
    Unit::new("mm³", "cubic millimeter", Dimension::LENGTH_CUBED, 1e-9);
/// Cubic centimetre.
pub const CUBIC_CENTIMETER: Unit =
    Unit::new("cm³", "cubic centimeter", Dimension::LENGTH_CUBED, 1e-6);
/// Cubic metre.
pub const CUBIC_METER: Unit = Unit::new("m³", "cubic meter", Dimension::LENGTH_CUBED, 1.0);

/// Every built-in `L³` unit.
pub static ALL: [Unit; 5] = [
    CUBIC_INCH,
    CUBIC_FOOT,
    CUBIC_MILLIMETER,
    CUBIC_CENTIMETER,
    CUBIC_METER,
];

/// A value in cubic inches.
pub fn cubic_inches(value: f64) -> Quantity {
    Quantity::new(value, CUBIC_INCH)
}

/// A value in cubic feet.
pub fn cubic_feet(value: f64) -> Quantity {
    Quantity::new(value, CUBIC_FOOT)
}

/// A value in cubic millimetres.
pub fn cubic_millimeters(value: f64) -> Quantity {
    Quantity::new(value, CUBIC_MILLIMETER)
}

/// A value in cubic metres.
pub fn cubic_meters(value: f64) -> Quantity {
    Quantity::new(value, CUBIC_METER)
}
