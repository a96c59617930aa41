//! Quantity type and its operations.

use crate::config::DisplaySettings;
use crate::dimension::Dimension;
use crate::error::{Result, UnitsError};
use crate::unit::{scales_match, Unit};
use crate::units::{self, unitless::UNITLESS};
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::ops::{Mul, Neg};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// A magnitude expressed in a specific [`Unit`].
///
/// The magnitude is stored in `unit`, not in the canonical SI unit; [`Quantity::base_magnitude`] gives the SI value.
/// Quantities are never mutated: every operation returns a new instance.
///
/// Operations that can fail (conversion, addition, multiplication and division by quantities, comparison) are named
/// methods returning [`Result`]. Infallible ones also have operator overloads.
///
/// ```rust
/// use structunits_core::length::{self, FOOT, INCH};
/// use structunits_core::area::SQUARE_INCH;
///
/// let a = length::inches(10.0);
/// let b = length::feet(1.0);
///
/// let sum = a.add(&b).unwrap();
/// assert_eq!(sum.unit(), &INCH);
/// assert!((sum.value() - 22.0).abs() < 1e-9);
///
/// let area = a.multiply_by(&a).unwrap();
/// assert_eq!(area.unit(), &SQUARE_INCH);
/// assert_eq!(area.to_display_string(), "100 in²");
///
/// assert!(a.add(&area).is_err());
/// assert!(a.convert_to(&FOOT).is_ok());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quantity {
    magnitude: f64,
    unit: Unit,
}

impl Quantity {
    /// Creates a quantity of `magnitude` in `unit`.
    #[inline]
    pub const fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// A dimensionless quantity.
    #[inline]
    pub const fn unitless(magnitude: f64) -> Self {
        Self::new(magnitude, UNITLESS)
    }

    /// Magnitude in the stored unit.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.magnitude
    }

    /// The stored unit.
    #[inline]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Dimension of the stored unit.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Magnitude in the canonical SI unit of the dimension.
    ///
    /// ```rust
    /// use structunits_core::length;
    /// assert!((length::feet(1.0).base_magnitude() - 0.3048).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn base_magnitude(&self) -> f64 {
        self.magnitude * self.unit.scale()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────

    /// Re-expresses this quantity in `target`.
    ///
    /// Fails with [`UnitsError::DimensionMismatch`] when `target` measures another dimension.
    pub fn convert_to(&self, target: &Unit) -> Result<Quantity> {
        Ok(Quantity::new(self.value_in(target)?, target.clone()))
    }

    /// Numeric value of this quantity in `target`.
    pub fn value_in(&self, target: &Unit) -> Result<f64> {
        UnitsError::ensure_same(self.dimension(), target.dimension())?;
        Ok(self.base_magnitude() / target.scale())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    /// Sum of two quantities of one dimension, expressed in `self`'s unit.
    pub fn add(&self, other: &Quantity) -> Result<Quantity> {
        let rhs = other.value_in_unit_of(self)?;
        Ok(Quantity::new(self.magnitude + rhs, self.unit.clone()))
    }

    /// Difference of two quantities of one dimension, expressed in `self`'s unit.
    pub fn subtract(&self, other: &Quantity) -> Result<Quantity> {
        let rhs = other.value_in_unit_of(self)?;
        Ok(Quantity::new(self.magnitude - rhs, self.unit.clone()))
    }

    fn value_in_unit_of(&self, lhs: &Quantity) -> Result<f64> {
        UnitsError::ensure_same(lhs.dimension(), self.dimension())?;
        Ok(self.base_magnitude() / lhs.unit.scale())
    }

    /// Adds a plain number. Only defined for dimensionless quantities.
    pub fn add_scalar(&self, scalar: f64) -> Result<Quantity> {
        UnitsError::ensure_same(self.dimension(), Dimension::UNITLESS)?;
        Ok(Quantity::new(self.magnitude + scalar, self.unit.clone()))
    }

    /// Subtracts a plain number. Only defined for dimensionless quantities.
    pub fn subtract_scalar(&self, scalar: f64) -> Result<Quantity> {
        UnitsError::ensure_same(self.dimension(), Dimension::UNITLESS)?;
        Ok(Quantity::new(self.magnitude - scalar, self.unit.clone()))
    }

    /// Scales the magnitude; the unit is unchanged.
    #[inline]
    pub fn multiply(&self, scalar: f64) -> Quantity {
        Quantity::new(self.magnitude * scalar, self.unit.clone())
    }

    /// Divides the magnitude by `scalar`; the unit is unchanged.
    ///
    /// Fails with [`UnitsError::DivisionByZero`] when `scalar` is zero.
    pub fn divide(&self, scalar: f64) -> Result<Quantity> {
        if scalar == 0.0 {
            return Err(UnitsError::DivisionByZero);
        }
        Ok(Quantity::new(self.magnitude / scalar, self.unit.clone()))
    }

    /// Product of two quantities.
    ///
    /// The dimension is the product of the operand dimensions and the unit the composite of the operand units
    /// (see [`Unit::product`]). A dimensionless result is folded into the unitless unit.
    ///
    /// ```rust
    /// use structunits_core::{force, length, moment::KIP_FOOT};
    ///
    /// let m = force::kips(3.0).multiply_by(&length::feet(2.0)).unwrap();
    /// assert_eq!(m.unit(), &KIP_FOOT);
    /// assert_eq!(m.value(), 6.0);
    /// ```
    ///
    /// Fails with [`UnitsError::InvalidArgument`] when the composed unit is out of range (a dimension exponent
    /// overflows `i32`, or the unit scale overflows `f64`).
    pub fn multiply_by(&self, other: &Quantity) -> Result<Quantity> {
        Ok(
            Quantity::new(self.magnitude * other.magnitude, self.unit.product(&other.unit)?)
                .collapse_unitless(),
        )
    }

    /// Quotient of two quantities.
    ///
    /// Fails with [`UnitsError::DivisionByZero`] when `other` has a zero magnitude.
    pub fn divide_by(&self, other: &Quantity) -> Result<Quantity> {
        if other.magnitude == 0.0 {
            return Err(UnitsError::DivisionByZero);
        }
        Ok(
            Quantity::new(self.magnitude / other.magnitude, self.unit.quotient(&other.unit)?)
                .collapse_unitless(),
        )
    }

    /// `1 / self`, with the dimension inverted.
    ///
    /// A scalar divided by a quantity is `q.reciprocal()?.multiply(x)`.
    ///
    /// ```rust
    /// use structunits_core::{length, time};
    ///
    /// let f = time::seconds(0.5).reciprocal().unwrap();
    /// assert_eq!(f.unit().symbol(), "1/s");
    /// assert_eq!(f.value(), 2.0);
    /// assert!(length::feet(0.0).reciprocal().is_err());
    /// ```
    pub fn reciprocal(&self) -> Result<Quantity> {
        Quantity::unitless(1.0).divide_by(self)
    }

    /// Folds a scaled dimensionless unit (such as `ft/in`) into a plain number.
    fn collapse_unitless(self) -> Quantity {
        if self.dimension().is_unitless() && self.unit != UNITLESS {
            Quantity::unitless(self.base_magnitude())
        } else {
            self
        }
    }

    /// Opposite magnitude, same unit.
    #[inline]
    pub fn negate(&self) -> Quantity {
        Quantity::new(-self.magnitude, self.unit.clone())
    }

    /// Absolute magnitude, same unit.
    #[inline]
    pub fn abs(&self) -> Quantity {
        Quantity::new(self.magnitude.abs(), self.unit.clone())
    }

    /// Integer power. `q.powi(0)` is unitless `1`.
    ///
    /// ```rust
    /// use structunits_core::{length, length_cubed::CUBIC_INCH};
    ///
    /// let v = length::inches(2.0).powi(3).unwrap();
    /// assert_eq!(v.unit(), &CUBIC_INCH);
    /// assert_eq!(v.value(), 8.0);
    /// ```
    ///
    /// Fails with [`UnitsError::InvalidArgument`] when the powered unit is out of range.
    pub fn powi(&self, n: i32) -> Result<Quantity> {
        Ok(Quantity::new(self.magnitude.powi(n), self.unit.powi(n)?).collapse_unitless())
    }

    /// Real power.
    ///
    /// An integral `exponent` behaves like [`Quantity::powi`]. A fractional exponent is only defined for
    /// dimensionless quantities and yields a dimensionless result.
    ///
    /// # Errors
    ///
    /// * [`UnitsError::InvalidArgument`] for a non-finite exponent or an integral one outside the `i32` range.
    /// * [`UnitsError::DimensionMismatch`] for a fractional exponent on a dimensioned quantity.
    pub fn powf(&self, exponent: f64) -> Result<Quantity> {
        if !exponent.is_finite() {
            return Err(UnitsError::InvalidArgument(format!(
                "exponent must be finite, got {exponent}"
            )));
        }
        if exponent.fract() == 0.0 {
            if exponent < f64::from(i32::MIN) || exponent > f64::from(i32::MAX) {
                return Err(UnitsError::InvalidArgument(format!(
                    "exponent {exponent} is out of range"
                )));
            }
            return self.powi(exponent as i32);
        }
        UnitsError::ensure_same(Dimension::UNITLESS, self.dimension())?;
        Ok(Quantity::unitless(self.base_magnitude().powf(exponent)))
    }

    /// Square root. See [`Quantity::root`].
    pub fn sqrt(&self) -> Result<Quantity> {
        self.root(2)
    }

    /// Cube root. See [`Quantity::root`].
    pub fn cbrt(&self) -> Result<Quantity> {
        self.root(3)
    }

    /// `n`-th root.
    ///
    /// The result unit is the built-in unit whose `n`-th power is the stored unit when one exists (`in²` gives `in`),
    /// otherwise the SI base unit of the root dimension.
    ///
    /// # Errors
    ///
    /// * [`UnitsError::InvalidArgument`] for `n == 0`, or for an even root of a negative magnitude.
    /// * [`UnitsError::NonIntegralRoot`] when some exponent of the dimension is not a multiple of `n`.
    pub fn root(&self, n: u32) -> Result<Quantity> {
        if n == 0 {
            return Err(UnitsError::InvalidArgument(
                "root degree must be positive".into(),
            ));
        }
        let dimension = self
            .dimension()
            .root(n)
            .ok_or(UnitsError::NonIntegralRoot {
                degree: n,
                dimension: self.dimension(),
            })?;
        if n % 2 == 0 && self.magnitude < 0.0 {
            return Err(UnitsError::InvalidArgument(format!(
                "even root of negative magnitude {}",
                self.magnitude
            )));
        }
        let root_unit = units::builtin().find(|u| {
            u.dimension() == dimension && scales_match(u.scale().powi(n as i32), self.unit.scale())
        });
        let (radicand, unit) = match root_unit {
            Some(unit) => (self.magnitude, unit.clone()),
            None => (self.base_magnitude(), Unit::base(dimension)),
        };
        Ok(Quantity::new(nth_root(radicand, n), unit))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────

    /// Orders two quantities of one dimension by their base magnitudes.
    ///
    /// # Errors
    ///
    /// * [`UnitsError::DimensionMismatch`] when the dimensions differ.
    /// * [`UnitsError::NotComparable`] when either magnitude is NaN.
    pub fn compare(&self, other: &Quantity) -> Result<Ordering> {
        UnitsError::ensure_same(self.dimension(), other.dimension())?;
        self.base_magnitude()
            .partial_cmp(&other.base_magnitude())
            .ok_or_else(|| UnitsError::NotComparable(format!("{self} and {other}")))
    }

    /// The smaller of two quantities, in its own unit. Ties return `other`.
    pub fn min(&self, other: &Quantity) -> Result<Quantity> {
        Ok(match self.compare(other)? {
            Ordering::Less => self.clone(),
            _ => other.clone(),
        })
    }

    /// The larger of two quantities, in its own unit. Ties return `other`.
    pub fn max(&self, other: &Quantity) -> Result<Quantity> {
        Ok(match self.compare(other)? {
            Ordering::Greater => self.clone(),
            _ => other.clone(),
        })
    }

    /// `true` when both quantities share a dimension and their base magnitudes differ by at most `tolerance`
    /// (in SI base units).
    pub fn approx_eq(&self, other: &Quantity, tolerance: f64) -> bool {
        self.dimension() == other.dimension()
            && (self.base_magnitude() - other.base_magnitude()).abs() <= tolerance
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Formatting
    // ─────────────────────────────────────────────────────────────────────────

    /// `"<magnitude> <symbol>"` using the shortest round-trip float formatting; unitless quantities print the
    /// magnitude alone.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Like [`Quantity::to_display_string`] with the precision taken from `settings`.
    ///
    /// ```rust
    /// use structunits_core::{length, DisplaySettings};
    ///
    /// let settings = DisplaySettings { precision: Some(2) };
    /// assert_eq!(length::feet(10.0 / 12.0).to_display_string_with(&settings), "0.83 ft");
    /// ```
    pub fn to_display_string_with(&self, settings: &DisplaySettings) -> String {
        match settings.precision {
            Some(p) => format!("{self:.p$}"),
            None => self.to_string(),
        }
    }
}

fn nth_root(x: f64, n: u32) -> f64 {
    match n {
        1 => x,
        2 => x.sqrt(),
        3 => x.cbrt(),
        _ => x.signum() * x.abs().powf(1.0 / f64::from(n)),
    }
}

/// Splits `"<number> <symbol>"` into its parts. A bare number has an empty symbol.
pub(crate) fn split_quantity_text(text: &str) -> Result<(f64, &str)> {
    let text = text.trim();
    let (number, symbol) = match text.split_once(char::is_whitespace) {
        Some((number, symbol)) => (number, symbol.trim()),
        None => (text, ""),
    };
    let value = number
        .parse::<f64>()
        .map_err(|e| UnitsError::Parse(format!("invalid magnitude '{number}' in '{text}': {e}")))?;
    Ok((value, symbol))
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait implementations
// ─────────────────────────────────────────────────────────────────────────────

/// Equal when the dimensions agree and the base magnitudes are within [`Dimension::equality_tolerance`].
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, self.dimension().equality_tolerance())
    }
}

/// `Some(Equal)` exactly when `==` holds, so values within the equality tolerance are neither `<` nor `>`.
/// `None` across dimensions or when a magnitude is NaN.
impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.compare(other).ok()
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.magnitude)?,
            None => write!(f, "{}", self.magnitude)?,
        }
        if !self.unit.symbol().is_empty() {
            write!(f, " {}", self.unit.symbol())?;
        }
        Ok(())
    }
}

/// Parses `"<number> <symbol>"` against the built-in catalog.
///
/// ```rust
/// use structunits_core::{Quantity, length::FOOT};
///
/// let q: Quantity = "10 ft".parse().unwrap();
/// assert_eq!(q.unit(), &FOOT);
/// assert!("10 furlong".parse::<Quantity>().is_err());
/// ```
impl FromStr for Quantity {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self> {
        let (value, symbol) = split_quantity_text(s)?;
        let unit =
            units::find_by_symbol(symbol).ok_or_else(|| UnitsError::UnknownUnit(symbol.into()))?;
        Ok(Quantity::new(value, unit.clone()))
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;
    #[inline]
    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.magnitude * rhs, self.unit)
    }
}

impl Mul<f64> for &Quantity {
    type Output = Quantity;
    #[inline]
    fn mul(self, rhs: f64) -> Quantity {
        self.multiply(rhs)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;
    #[inline]
    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Neg for Quantity {
    type Output = Quantity;
    #[inline]
    fn neg(self) -> Quantity {
        Quantity::new(-self.magnitude, self.unit)
    }
}

impl Neg for &Quantity {
    type Output = Quantity;
    #[inline]
    fn neg(self) -> Quantity {
        self.negate()
    }
}
