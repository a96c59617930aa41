//! Time units. The canonical scaling unit is [`SECOND`].

use crate::{Dimension, Quantity, Unit};

/// Second (SI).
pub const SECOND: Unit = Unit::new("s", "second", Dimension::TIME, 1.0);
/// Minute (`60 s`).
pub const MINUTE: Unit = Unit::new("min", "minute", Dimension::TIME, 60.0);
/// Hour (`3600 s`).
pub const HOUR: Unit = Unit::new("h", "hour", Dimension::TIME, 3_600.0);

/// Every built-in time unit.
pub static ALL: [Unit; 3] = [SECOND, MINUTE, HOUR];

/// A duration in seconds.
pub fn seconds(value: f64) -> Quantity {
    Quantity::new(value, SECOND)
}

/// A duration in minutes.
pub fn minutes(value: f64) -> Quantity {
    Quantity::new(value, MINUTE)
}

/// A duration in hours.
pub fn hours(value: f64) -> Quantity {
    Quantity::new(value, HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn half_hour_roundtrip() {
        let s = hours(0.5).convert_to(&SECOND).unwrap();
        assert_relative_eq!(s.value(), 1800.0);
        assert_relative_eq!(s.value_in(&MINUTE).unwrap(), 30.0);
        assert_relative_eq!(seconds(90.0).value_in(&MINUTE).unwrap(), 1.5);
        assert_relative_eq!(minutes(120.0).value_in(&HOUR).unwrap(), 2.0);
    }
}
