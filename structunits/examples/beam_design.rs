//! Simply supported beam check mixing imperial and metric inputs, with a registry loaded from TOML.

use structunits::prelude::*;
use structunits::envelope;

const CONFIG: &str = r#"
[display]
precision = 2

[[units]]
symbol = "tf/m"
label = "tonne-force per meter"
scale = 9806.65
dimension = { force = 1, length = -1 }

[aliases]
tonnes_per_meter = "tf/m"
"#;

fn main() -> Result<(), UnitsError> {
    let config = UnitsConfig::from_toml_str(CONFIG)?;
    let registry = config.build_registry()?;
    let display = config.display;

    let span = registry.parse_quantity("24 ft")?;
    let dead = registry.parse_quantity("0.8 kip/ft")?;
    let superimposed = registry.parse_quantity("0.3 tonnes_per_meter")?;
    let live = kilonewtons_per_meter(14.6);

    let w = dead
        .add(&superimposed)?
        .multiply(1.2)
        .add(&live.multiply(1.6))?;
    let moment = w.multiply_by(&span.powi(2)?)?.divide(8.0)?;
    let shear = w.multiply_by(&span)?.divide(2.0)?;
    println!("w_u = {}", w.to_display_string_with(&display));
    println!("M_u = {}", moment.convert_to(&KIP_FOOT)?.to_display_string_with(&display));
    println!("V_u = {}", shear.convert_to(&KIP)?.to_display_string_with(&display));

    // W16x26: S_x = 38.4 in³
    let section_modulus = cubic_inches(38.4);
    let stress = moment.divide_by(&section_modulus)?;
    let fy = ksi(50.0);
    println!("f_b = {}", stress.convert_to(&KSI)?.to_display_string_with(&display));
    println!("f_b / F_y = {}", stress.divide_by(&fy)?.to_display_string_with(&display));

    let end_moments = [kip_feet(-45.0), kilonewton_meters(70.0), moment.clone()];
    let governing = envelope::abs_envelope_of(&end_moments)?;
    println!("governing |M| = {}", governing.to_display_string_with(&display));
    Ok(())
}
