//! Integration-level tests for the `structunits` facade crate.

use structunits::prelude::*;
use structunits::{area, length, moment, stress};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use std::cmp::Ordering;

// ─────────────────────────────────────────────────────────────────────────────
// Quantity contract
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn ten_inches_in_feet() {
    let q = Quantity::new(10.0, INCH).convert_to(&FOOT).unwrap();
    assert_abs_diff_eq!(q.value(), 0.8333, epsilon = 1e-4);
    assert_eq!(q, Quantity::new(0.8333, FOOT));
}

#[test]
fn one_foot_in_meters() {
    let q = Quantity::new(1.0, FOOT).convert_to(&METER).unwrap();
    assert_relative_eq!(q.value(), 0.3048, max_relative = 1e-12);
}

#[test]
fn ten_inches_plus_one_foot() {
    let q = Quantity::new(10.0, INCH)
        .add(&Quantity::new(1.0, FOOT))
        .unwrap();
    assert_eq!(q, Quantity::new(22.0, INCH));
    assert_eq!(q.unit(), &INCH);
}

#[test]
fn ten_inches_squared() {
    let a = Quantity::new(10.0, INCH)
        .multiply_by(&Quantity::new(10.0, INCH))
        .unwrap();
    assert_eq!(a.dimension(), Dimension::AREA);
    assert_eq!(Dimension::LENGTH.checked_mul(Dimension::LENGTH), Some(a.dimension()));
    let m2 = a.convert_to(&SQUARE_METER).unwrap();
    assert_relative_eq!(m2.value(), 0.0254 * 0.0254 * 100.0, max_relative = 1e-12);
}

#[test]
fn meter_compares_greater_than_foot() {
    let ord = Quantity::new(1.0, METER)
        .compare(&Quantity::new(1.0, FOOT))
        .unwrap();
    assert_eq!(ord, Ordering::Greater);
}

#[test]
fn length_plus_area_is_a_dimension_mismatch() {
    let err = inches(1.0).add(&square_inches(1.0)).unwrap_err();
    assert_eq!(
        err,
        UnitsError::DimensionMismatch {
            expected: Dimension::LENGTH,
            found: Dimension::AREA,
        }
    );
}

#[test]
fn scalar_division_by_zero() {
    assert_eq!(feet(1.0).divide(0.0).unwrap_err(), UnitsError::DivisionByZero);
}

#[test]
fn display_string() {
    assert_eq!(Quantity::new(1.5, FOOT).to_display_string(), "1.5 ft");
    assert_eq!(unitless(3.0).to_display_string(), "3");
}

// ─────────────────────────────────────────────────────────────────────────────
// Structural workflows
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn simple_span_moment() {
    let w = kips_per_foot(2.0);
    let l = feet(30.0);
    let m = w.multiply_by(&l.powi(2).unwrap()).unwrap().divide(8.0).unwrap();
    assert_eq!(m.unit(), &KIP_FOOT);
    assert_relative_eq!(m.value(), 225.0, max_relative = 1e-12);
    assert_relative_eq!(
        m.value_in(&KILONEWTON_METER).unwrap(),
        305.059_038_374_565,
        max_relative = 1e-12
    );
}

#[test]
fn bending_stress_from_mixed_units() {
    let m = kip_feet(100.0);
    let s = cubic_inches(60.0);
    let fb = m.divide_by(&s).unwrap();
    assert_eq!(fb.dimension(), Dimension::STRESS);
    assert_relative_eq!(fb.value_in(&KSI).unwrap(), 20.0, max_relative = 1e-12);
}

#[test]
fn section_properties() {
    let b = inches(12.0);
    let h = inches(24.0);
    let i = b.multiply_by(&h.powi(3).unwrap()).unwrap().divide(12.0).unwrap();
    assert_eq!(i.unit(), &INCH_TO_THE_4TH);
    assert_relative_eq!(i.value(), 13_824.0);
    let r = i.divide_by(&b.multiply_by(&h).unwrap()).unwrap().sqrt().unwrap();
    assert_eq!(r.unit(), &INCH);
    assert_relative_eq!(r.value(), 48.0_f64.sqrt(), max_relative = 1e-12);
}

#[test]
fn utilization_ratio_is_unitless() {
    let demand = psi(18_000.0);
    let capacity = megapascals(248.2);
    let ratio = demand.divide_by(&capacity).unwrap();
    assert_eq!(ratio.unit(), &UNITLESS);
    assert_relative_eq!(ratio.value(), 0.5, max_relative = 1e-3);
    assert!(ratio.add_scalar(-1.0).unwrap().value() < 0.0);
}

#[test]
fn envelopes_over_load_cases() {
    let cases = [kip_feet(120.0), kip_feet(-210.0), kilonewton_meters(250.0)];
    let max = max_of(&cases).unwrap();
    assert_eq!(max.unit(), &KILONEWTON_METER);
    let min = min_of(&cases).unwrap();
    assert_relative_eq!(min.value(), -210.0);
    let governing = abs_envelope_of(&cases).unwrap();
    assert_eq!(governing.unit(), &KIP_FOOT);
    assert_relative_eq!(governing.value(), 210.0);
    let signed = signed_abs_envelope(&cases[1], &cases[0]).unwrap();
    assert_relative_eq!(signed.value(), -210.0);
    assert!(abs_envelope(&cases[0], &kips(1.0)).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Registry and configuration
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn registry_parses_aliases() {
    let registry = UnitRegistry::default();
    let q = registry.parse_quantity("3 feet").unwrap();
    assert_eq!(q.unit(), &FOOT);
    assert_relative_eq!(
        registry.convert_value(1.0, "ksi", "MPa").unwrap(),
        6.894_757_293_168_361,
        max_relative = 1e-12
    );
}

#[test]
fn config_extends_registry() {
    let config = UnitsConfig::from_toml_str(
        r#"
        [[units]]
        symbol = "yd"
        label = "yard"
        scale = 0.9144
        dimension = { length = 1 }

        [aliases]
        yards = "yd"
        "#,
    )
    .unwrap();
    let registry = config.build_registry().unwrap();
    let q = registry.parse_quantity("2 yards").unwrap();
    assert_relative_eq!(q.value_in(&FOOT).unwrap(), 6.0, max_relative = 1e-12);
    assert_eq!(registry.units_of(Dimension::LENGTH).len(), length::ALL.len() + 1);
}

#[test]
fn serde_json_roundtrip() {
    let q = kip_feet(42.5);
    let json = serde_json::to_string(&q).unwrap();
    let back: Quantity = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
    assert_eq!(back.unit().symbol(), "k-ft");
}

#[test]
fn oversized_powers_are_errors_not_panics() {
    let err = square_feet(2.0).powi(i32::MAX / 2 + 1).unwrap_err();
    assert!(matches!(err, UnitsError::InvalidArgument(_)));
    assert!(kips(2.0).powi(1000).is_err());
}

#[test]
fn tampered_payloads_are_rejected() {
    let json = r#"{"magnitude":1.0,"unit":{"symbol":"zz","label":"zz","dimension":{"length":1},"scale":-1.0}}"#;
    assert!(serde_json::from_str::<Quantity>(json).is_err());
}

#[test]
fn module_paths_match_prelude() {
    assert_eq!(&area::SQUARE_FOOT, &SQUARE_FOOT);
    assert_eq!(&moment::NEWTON_METER, &NEWTON_METER);
    assert_eq!(&stress::PASCAL, &PASCAL);
}

// ─────────────────────────────────────────────────────────────────────────────
// Property-based tests
// ─────────────────────────────────────────────────────────────────────────────

fn stress_unit() -> impl Strategy<Value = Unit> {
    proptest::sample::select(stress::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_stress_roundtrip(m in -1e7..1e7f64, u1 in stress_unit(), u2 in stress_unit()) {
        let q = Quantity::new(m, u1.clone());
        let back = q.convert_to(&u2).and_then(|x| x.convert_to(&u1)).unwrap();
        prop_assert!((back.value() - m).abs() <= 1e-9 * m.abs().max(1.0));
    }

    #[test]
    fn prop_parse_display_roundtrip(m in -1e6..1e6f64) {
        let q = kip_feet(m);
        let parsed: Quantity = q.to_display_string().parse().unwrap();
        prop_assert_eq!(parsed.value(), m);
        prop_assert_eq!(parsed.unit(), &KIP_FOOT);
    }
}
