//! Built-in unit catalog grouped by dimension.
//!
//! Every module declares its units as `const` items, a static `ALL` list, and shorthand constructors. Canonical
//! scaling units are SI: metre for length, newton for force, second for time, and their products for derived
//! dimensions (`m²`, `N-m`, `Pa`, …).
//!
//! ## Modules
//!
//! - [`length`]: in, ft, mm, cm, m.
//! - [`area`]: in², ft², mm², cm², m².
//! - [`length_cubed`]: in³, ft³, mm³, cm³, m³.
//! - [`length_to_the_4th`]: in⁴, ft⁴, mm⁴, cm⁴, m⁴.
//! - [`force`]: lb, kip, N, kN.
//! - [`moment`]: lb-in, lb-ft, k-in, k-ft and the metric force·length family.
//! - [`force_per_length`]: lb/in, lb/ft, k/in, k/ft and the metric force/length family.
//! - [`stress`]: psi, ksi, psf, ksf, Pa, kPa, MPa.
//! - [`time`]: s, min, h.
//! - [`unitless`]: the dimensionless unit.
//!
//! Defined constants follow the international definitions: `1 in = 0.0254 m` exactly and `1 lbf = 4.4482216152605 N`
//! exactly.

use crate::dimension::Dimension;
use crate::unit::{scales_match, Unit};

pub mod area;
pub mod force;
pub mod force_per_length;
pub mod length;
pub mod length_cubed;
pub mod length_to_the_4th;
pub mod moment;
pub mod stress;
pub mod time;
pub mod unitless;

/// Metres in one international inch.
pub const METERS_PER_INCH: f64 = 0.0254;
/// Inches in one foot.
pub const INCHES_PER_FOOT: f64 = 12.0;
/// Metres in one international foot.
pub const METERS_PER_FOOT: f64 = METERS_PER_INCH * INCHES_PER_FOOT;
/// Newtons in one pound-force.
pub const NEWTONS_PER_POUND: f64 = 4.448_221_615_260_5;
/// Pounds in one kip.
pub const POUNDS_PER_KIP: f64 = 1_000.0;
/// Newtons in one kip.
pub const NEWTONS_PER_KIP: f64 = NEWTONS_PER_POUND * POUNDS_PER_KIP;

/// Iterates every built-in unit in catalog order.
pub fn builtin() -> impl Iterator<Item = &'static Unit> {
    length::ALL
        .iter()
        .chain(area::ALL.iter())
        .chain(length_cubed::ALL.iter())
        .chain(length_to_the_4th::ALL.iter())
        .chain(force::ALL.iter())
        .chain(moment::ALL.iter())
        .chain(force_per_length::ALL.iter())
        .chain(stress::ALL.iter())
        .chain(time::ALL.iter())
        .chain(unitless::ALL.iter())
}

/// Looks up a built-in unit by its exact symbol.
///
/// ```rust
/// use structunits_core::units;
///
/// assert_eq!(units::find_by_symbol("ksi").map(|u| u.label()), Some("kips per square inch"));
/// assert!(units::find_by_symbol("furlong").is_none());
/// ```
pub fn find_by_symbol(symbol: &str) -> Option<&'static Unit> {
    builtin().find(|unit| unit.symbol() == symbol)
}

/// Finds the first built-in unit with the given dimension whose scale matches `scale`.
pub fn find_equivalent(dimension: Dimension, scale: f64) -> Option<&'static Unit> {
    builtin().find(|unit| unit.dimension() == dimension && scales_match(unit.scale(), scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn symbols_are_unique() {
        let mut seen = BTreeSet::new();
        for unit in builtin() {
            assert!(seen.insert(unit.symbol()), "duplicate symbol {}", unit.symbol());
        }
    }

    #[test]
    fn every_family_has_its_dimension() {
        let families: [(&[Unit], Dimension); 9] = [
            (&length::ALL[..], Dimension::LENGTH),
            (&area::ALL[..], Dimension::AREA),
            (&length_cubed::ALL[..], Dimension::LENGTH_CUBED),
            (&length_to_the_4th::ALL[..], Dimension::LENGTH_TO_THE_4TH),
            (&force::ALL[..], Dimension::FORCE),
            (&moment::ALL[..], Dimension::MOMENT),
            (&force_per_length::ALL[..], Dimension::FORCE_PER_LENGTH),
            (&stress::ALL[..], Dimension::STRESS),
            (&time::ALL[..], Dimension::TIME),
        ];
        for (units, dimension) in families {
            assert!(units.iter().all(|u| u.dimension() == dimension));
        }
    }

    #[test]
    fn each_family_has_a_canonical_unit() {
        for dimension in [
            Dimension::LENGTH,
            Dimension::AREA,
            Dimension::LENGTH_CUBED,
            Dimension::LENGTH_TO_THE_4TH,
            Dimension::FORCE,
            Dimension::MOMENT,
            Dimension::FORCE_PER_LENGTH,
            Dimension::STRESS,
            Dimension::TIME,
            Dimension::UNITLESS,
        ] {
            assert!(find_equivalent(dimension, 1.0).is_some(), "{dimension}");
        }
    }

    #[test]
    fn find_equivalent_tolerates_rounding() {
        let scale = METERS_PER_FOOT * METERS_PER_FOOT * (1.0 + 1e-12);
        assert_eq!(
            find_equivalent(Dimension::AREA, scale).map(Unit::symbol),
            Some("ft²")
        );
    }
}
