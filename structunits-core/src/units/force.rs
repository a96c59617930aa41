//! Force units.
//!
//! The canonical scaling unit is [`NEWTON`]. The pound is pound-force (`4.4482216152605 N`) and the kip is
//! `1000 lb`.
//!
//! ```rust
//! use structunits_core::force::{self, POUND};
//!
//! let p = force::kips(2.5);
//! assert!((p.value_in(&POUND).unwrap() - 2500.0).abs() < 1e-9);
//! ```

use super::{NEWTONS_PER_KIP, NEWTONS_PER_POUND};
use crate::{Dimension, Quantity, Unit};

/// Pound-force.
pub const POUND: Unit = Unit::new("lb", "pound", Dimension::FORCE, NEWTONS_PER_POUND);
/// Kip (`1000 lb`).
pub const KIP: Unit = Unit::new("kip", "kip", Dimension::FORCE, NEWTONS_PER_KIP);
/// Newton (SI).
pub const NEWTON: Unit = Unit::new("N", "newton", Dimension::FORCE, 1.0);
/// Kilonewton.
pub const KILONEWTON: Unit = Unit::new("kN", "kilonewton", Dimension::FORCE, 1e3);

/// Every built-in force unit.
pub static ALL: [Unit; 4] = [POUND, KIP, NEWTON, KILONEWTON];

/// A force in pounds.
pub fn pounds(value: f64) -> Quantity {
    Quantity::new(value, POUND)
}

/// A force in kips.
pub fn kips(value: f64) -> Quantity {
    Quantity::new(value, KIP)
}

/// A force in newtons.
pub fn newtons(value: f64) -> Quantity {
    Quantity::new(value, NEWTON)
}

/// A force in kilonewtons.
pub fn kilonewtons(value: f64) -> Quantity {
    Quantity::new(value, KILONEWTON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kip_to_kilonewtons() {
        let kn = kips(1.0).value_in(&KILONEWTON).unwrap();
        assert_relative_eq!(kn, 4.448_221_615_260_5, max_relative = 1e-12);
    }

    #[test]
    fn pound_to_newtons() {
        let n = pounds(1.0).convert_to(&NEWTON).unwrap();
        assert_relative_eq!(n.value(), 4.448_221_615_260_5, max_relative = 1e-12);
        assert_eq!(n.unit(), &NEWTON);
    }

    #[test]
    fn kilonewtons_to_newtons() {
        assert_relative_eq!(kilonewtons(1.5).value_in(&NEWTON).unwrap(), 1500.0);
        assert_relative_eq!(newtons(1000.0).value_in(&KILONEWTON).unwrap(), 1.0);
    }
}
