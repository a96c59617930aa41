//! Length units.
//!
//! The canonical scaling unit for this dimension is [`METER`] (`METER.scale() == 1.0`). Imperial units follow the
//! international definitions: the inch is exactly `0.0254 m` and the foot exactly `12 in`.
//!
//! ```rust
//! use structunits_core::length::{self, FOOT};
//!
//! let ten_inches = length::inches(10.0);
//! let feet = ten_inches.value_in(&FOOT).unwrap();
//! assert!((feet - 10.0 / 12.0).abs() < 1e-12);
//! ```

use super::{METERS_PER_FOOT, METERS_PER_INCH};
use crate::{Dimension, Quantity, Unit};

/// Inch (`0.0254 m`).
pub const INCH: Unit = Unit::new("in", "inch", Dimension::LENGTH, METERS_PER_INCH);
/// Foot (`12 in`).
pub const FOOT: Unit = Unit::new("ft", "foot", Dimension::LENGTH, METERS_PER_FOOT);
/// Millimetre (`1e-3 m`).
pub const MILLIMETER: Unit = Unit::new("mm", "millimeter", Dimension::LENGTH, 1e-3);
/// Centimetre (`1e-2 m`).
pub const CENTIMETER: Unit = Unit::new("cm", "centimeter", Dimension::LENGTH, 1e-2);
/// Metre (SI base unit).
pub const METER: Unit = Unit::new("m", "meter", Dimension::LENGTH, 1.0);

/// Every built-in length unit.
pub static ALL: [Unit; 5] = [INCH, FOOT, MILLIMETER, CENTIMETER, METER];

/// A length in inches.
pub fn inches(value: f64) -> Quantity {
    Quantity::new(value, INCH)
}

/// A length in feet.
pub fn feet(value: f64) -> Quantity {
    Quantity::new(value, FOOT)
}

/// A length in millimetres.
pub fn millimeters(value: f64) -> Quantity {
    Quantity::new(value, MILLIMETER)
}

/// A length in centimetres.
pub fn centimeters(value: f64) -> Quantity {
    Quantity::new(value, CENTIMETER)
}

/// A length in metres.
pub fn meters(value: f64) -> Quantity {
    Quantity::new(value, METER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn ten_inches_to_feet() {
        let ft = inches(10.0).convert_to(&FOOT).unwrap();
        assert_abs_diff_eq!(ft.value(), 0.8333, epsilon = 1e-4);
        assert_eq!(ft.unit(), &FOOT);
    }

    #[test]
    fn one_foot_to_meters() {
        let m = feet(1.0).convert_to(&METER).unwrap();
        assert_relative_eq!(m.value(), 0.3048, max_relative = 1e-12);
    }

    #[test]
    fn one_meter_to_inches() {
        let inch = meters(1.0).value_in(&INCH).unwrap();
        assert_relative_eq!(inch, 39.370_078_740_157_48, max_relative = 1e-12);
    }

    #[test]
    fn metric_ladder() {
        assert_relative_eq!(centimeters(1.0).value_in(&MILLIMETER).unwrap(), 10.0);
        assert_relative_eq!(meters(1.0).value_in(&CENTIMETER).unwrap(), 100.0);
        assert_relative_eq!(millimeters(25.4).value_in(&INCH).unwrap(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn shorthand_constructors_keep_unit() {
        assert_eq!(inches(1.0).unit().symbol(), "in");
        assert_eq!(feet(1.0).unit().symbol(), "ft");
        assert_eq!(millimeters(1.0).unit().symbol(), "mm");
        assert_eq!(centimeters(1.0).unit().symbol(), "cm");
        assert_eq!(meters(1.0).unit().symbol(), "m");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_between_any_two_units(
            v in -1e6..1e6f64,
            a in 0..ALL.len(),
            b in 0..ALL.len(),
        ) {
            let original = Quantity::new(v, ALL[a].clone());
            let back = original
                .convert_to(&ALL[b])
                .and_then(|q| q.convert_to(&ALL[a]))
                .unwrap();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_feet_inches_ratio(v in -1e6..1e6f64) {
            let inch = feet(v).value_in(&INCH).unwrap();
            prop_assert!((inch - v * 12.0).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }
}
