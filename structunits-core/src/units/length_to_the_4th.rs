//! `L⁴` units, used for second moments of area.

use super::{METERS_PER_FOOT, METERS_PER_INCH};
use crate::{Dimension, Quantity, Unit};

const IN2: f64 = METERS_PER_INCH * METERS_PER_INCH;
const FT2: f64 = METERS_PER_FOOT * METERS_PER_FOOT;

/// Inch to the fourth.
pub const INCH_TO_THE_4TH: Unit = Unit::new(
    "in⁴",
    "inch to the fourth",
    Dimension::LENGTH_TO_THE_4TH,
    IN2 * IN2,
);
/// Foot to the fourth.
pub const FOOT_TO_THE_4TH: Unit = Unit::new(
    "ft⁴",
    "foot to the fourth",
    Dimension::LENGTH_TO_THE_4TH,
    FT2 * FT2,
);
/// Millimetre to the fourth.
pub const MILLIMETER_TO_THE_4TH: Unit = Unit::new(
    "mm⁴",
    "millimeter to the fourth",
    Dimension::LENGTH_TO_THE_4TH,
    1e-12,
);
/// Centimetre to the fourth.
pub const CENTIMETER_TO_THE_4TH: Unit = Unit::new(
    "cm⁴",
    "centimeter to the fourth",
    Dimension::LENGTH_TO_THE_4TH,
    1e-8,
);
/// Metre to the fourth.
pub const METER_TO_THE_4TH: Unit = Unit::new(
    "m⁴",
    "meter to the fourth",
    Dimension::LENGTH_TO_THE_4TH,
    1.0,
);

/// Every built-in `L⁴` unit.
pub static ALL: [Unit; 5] = [
    INCH_TO_THE_4TH,
    FOOT_TO_THE_4TH,
    MILLIMETER_TO_THE_4TH,
    CENTIMETER_TO_THE_4TH,
    METER_TO_THE_4TH,
];

/// A value in inches to the fourth.
pub fn inches_to_the_4th(value: f64) -> Quantity {
    Quantity::new(value, INCH_TO_THE_4TH)
}

/// A value in feet to the fourth.
pub fn feet_to_the_4th(value: f64) -> Quantity {
    Quantity::new(value, FOOT_TO_THE_4TH)
}

/// A value in millimetres to the fourth.
pub fn millimeters_to_the_4th(value: f64) -> Quantity {
    Quantity::new(value, MILLIMETER_TO_THE_4TH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{area, length};
    use approx::assert_relative_eq;

    #[test]
    fn foot_to_the_4th_in_inches() {
        let v = feet_to_the_4th(1.0).value_in(&INCH_TO_THE_4TH).unwrap();
        assert_relative_eq!(v, 20_736.0, max_relative = 1e-12);
    }

    #[test]
    fn fourth_powers_resolve_to_catalog() {
        for (l, i) in length::ALL.iter().zip(ALL.iter()) {
            assert_eq!(&l.powi(4).unwrap(), i);
        }
        assert_eq!(area::SQUARE_INCH.powi(2).unwrap(), INCH_TO_THE_4TH);
    }

    #[test]
    fn millimeters_to_inches() {
        let v = millimeters_to_the_4th(416_231.426).value_in(&INCH_TO_THE_4TH).unwrap();
        assert_relative_eq!(v, 1.0, max_relative = 1e-6);
        assert_relative_eq!(inches_to_the_4th(1.0).value_in(&METER_TO_THE_4TH).unwrap(), 4.162_314_256e-7, max_relative = 1e-9);
    }
}
