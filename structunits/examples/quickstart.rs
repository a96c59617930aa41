//! Minimal end-to-end example: conversions, arithmetic, functions and comparisons on lengths.

use structunits::prelude::*;

fn main() -> Result<(), UnitsError> {
    let inch_length = inches(10.0);
    let foot_length = feet(1.0);
    let meter_length = meters(1.0);

    println!("==== Basic Conversions ====");
    println!("10 inches = {:.4}", inch_length.convert_to(&FOOT)?);
    println!("10 inches = {:.4}", inch_length.convert_to(&METER)?);
    println!("1 foot = {:.4}", foot_length.convert_to(&INCH)?);
    println!("1 meter = {:.4}", meter_length.convert_to(&FOOT)?);

    println!("\n==== Operations ====");
    let sum = inch_length.add(&foot_length)?;
    println!("10 inches + 1 foot = {:.4}", sum);
    println!("10 inches + 1 foot = {:.4}", sum.convert_to(&FOOT)?);
    let diff = meter_length.subtract(&foot_length)?;
    println!("1 meter - 1 foot = {:.4}", diff.convert_to(&INCH)?);
    println!("10 inches * 2 = {:.4}", &inch_length * 2.0);
    println!("10 inches / 2 = {:.4}", inch_length.divide(2.0)?);
    let area = inch_length.multiply_by(&inch_length)?;
    println!("Area of 10-inch square = {:.4}", area);
    println!("Side of that square = {:.4}", area.sqrt()?);
    println!("1 / 10 inches = {:.4}", inch_length.reciprocal()?);

    println!("\n==== Mathematical Functions ====");
    println!("|-5 inches| = {:.4}", inches(-5.0).abs());
    println!("min(10 in, 1 ft) = {:.4}", inch_length.min(&foot_length)?);
    println!("max(10 in, 1 ft) = {:.4}", inch_length.max(&foot_length)?);

    println!("\n==== Comparisons ====");
    println!("10 inches == 1 foot: {}", inch_length == foot_length);
    println!("10 inches < 1 foot: {}", inch_length < foot_length);
    println!("1 meter >= 1 foot: {}", meter_length >= foot_length);
    println!("1 meter vs 1 foot: {:?}", meter_length.compare(&foot_length)?);

    println!("\n==== Dimension Mismatch ====");
    if let Err(e) = inch_length.add(&area) {
        println!("10 in + 100 in² -> {e}");
    }
    Ok(())
}
