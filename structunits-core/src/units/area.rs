//! Area units.
//!
//! The canonical scaling unit for this dimension is [`SQUARE_METER`]. Each unit is the square of the matching
//! [`length`](super::length) unit, so `INCH.product(&INCH)` resolves to [`SQUARE_INCH`].

use super::{METERS_PER_FOOT, METERS_PER_INCH};
use crate::{Dimension, Quantity, Unit};

/// Square inch.
pub const SQUARE_INCH: Unit = Unit::new(
    "in²",
    "square inch",
    Dimension::AREA,
    METERS_PER_INCH * METERS_PER_INCH,
);
/// Square foot.
pub const SQUARE_FOOT: Unit = Unit::new(
    "ft²",
    "square foot",
    Dimension::AREA,
    METERS_PER_FOOT * METERS_PER_FOOT,
);
/// Square millimetre.
pub const SQUARE_MILLIMETER: Unit = Unit::new("mm²", "square millimeter", Dimension::AREA, 1e-6);
/// Square centimetre.
pub const SQUARE_CENTIMETER: Unit = Unit::new("cm²", "square centimeter", Dimension::AREA, 1e-4);
/// Square metre.
pub const SQUARE_METER: Unit = Unit::new("m²", "square meter", Dimension::AREA, 1.0);

/// Every built-in area unit.
pub static ALL: [Unit; 5] = [
    SQUARE_INCH,
    SQUARE_FOOT,
    SQUARE_MILLIMETER,
    SQUARE_CENTIMETER,
    SQUARE_METER,
];

/// An area in square inches.
pub fn square_inches(value: f64) -> Quantity {
    Quantity::new(value, SQUARE_INCH)
}

/// An area in square feet.
pub fn square_feet(value: f64) -> Quantity {
    Quantity::new(value, SQUARE_FOOT)
}

/// An area in square millimetres.
pub fn square_millimeters(value: f64) -> Quantity {
    Quantity::new(value, SQUARE_MILLIMETER)
}

/// An area in square centimetres.
pub fn square_centimeters(value: f64) -> Quantity {
    Quantity::new(value, SQUARE_CENTIMETER)
}

/// An area in square metres.
pub fn square_meters(value: f64) -> Quantity {
    Quantity::new(value, SQUARE_METER)
}
