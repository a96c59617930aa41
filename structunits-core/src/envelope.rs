//! Envelopes: the governing value among several quantities of one dimension.
//!
//! Every function checks that all operands share a dimension and returns the governing operand in its own unit.
//!
//! ```rust
//! use structunits_core::{envelope, moment};
//!
//! let moments = [moment::kip_feet(120.0), moment::kip_feet(-180.0), moment::kip_inches(1500.0)];
//! let governing = envelope::abs_envelope_of(&moments).unwrap();
//! assert_eq!(governing.to_display_string(), "180 k-ft");
//! ```

use crate::error::{Result, UnitsError};
use crate::quantity::Quantity;
use core::cmp::Ordering;

fn fold_by<'a, I, F>(values: I, keep_candidate: F) -> Result<Quantity>
where
    I: IntoIterator<Item = &'a Quantity>,
    F: Fn(Ordering) -> bool,
{
    let mut values = values.into_iter();
    let mut best = values.next().ok_or(UnitsError::EmptyInput)?;
    for candidate in values {
        if keep_candidate(candidate.compare(best)?) {
            best = candidate;
        }
    }
    Ok(best.clone())
}

/// Smallest of `values`. The first of equal values wins.
///
/// # Errors
///
/// * [`UnitsError::EmptyInput`] when `values` is empty.
/// * [`UnitsError::DimensionMismatch`] on mixed dimensions.
pub fn min_of<'a, I>(values: I) -> Result<Quantity>
where
    I: IntoIterator<Item = &'a Quantity>,
{
    fold_by(values, |ord| ord == Ordering::Less)
}

/// Largest of `values`. The first of equal values wins.
pub fn max_of<'a, I>(values: I) -> Result<Quantity>
where
    I: IntoIterator<Item = &'a Quantity>,
{
    fold_by(values, |ord| ord == Ordering::Greater)
}

/// The larger absolute value of `a` and `b`, as a non-negative quantity. Ties return `|b|`.
pub fn abs_envelope(a: &Quantity, b: &Quantity) -> Result<Quantity> {
    a.abs().max(&b.abs())
}

/// The largest absolute value over `values`, as a non-negative quantity.
pub fn abs_envelope_of<'a, I>(values: I) -> Result<Quantity>
where
    I: IntoIterator<Item = &'a Quantity>,
{
    let magnitudes: Vec<Quantity> = values.into_iter().map(Quantity::abs).collect();
    max_of(&magnitudes)
}

/// Whichever of `a` and `b` has the larger absolute value, keeping its sign. Ties return `b`.
///
/// ```rust
/// use structunits_core::{envelope, force};
///
/// let p = envelope::signed_abs_envelope(&force::kips(12.0), &force::kips(-15.0)).unwrap();
/// assert_eq!(p.value(), -15.0);
/// ```
pub fn signed_abs_envelope(a: &Quantity, b: &Quantity) -> Result<Quantity> {
    Ok(match a.abs().compare(&b.abs())? {
        Ordering::Greater => a.clone(),
        _ => b.clone(),
    })
}
