//! Unit descriptors and unit composition.

use crate::dimension::Dimension;
use crate::error::{Result, UnitsError};
use crate::units::{self, unitless::UNITLESS};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// A named scale within a [`Dimension`].
///
/// * `scale` is the conversion factor from this unit to the *canonical SI unit* of the same dimension. Metres,
///   newtons and seconds are canonical, so `FOOT.scale() == 0.3048` because `1 ft = 0.3048 m`.
/// * `symbol` is the printable string (e.g. `"ft"` or `"kN-m"`).
///
/// # Invariants
///
/// - `scale` is finite and strictly positive.
/// - `symbol` is non-empty and free of whitespace, except for the unitless unit whose symbol is empty.
///
/// Built-in units are `const` items; extension units are created with [`Unit::custom`], which enforces the
/// invariants. Deserialization enforces them as well.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "UnitRepr")]
pub struct Unit {
    symbol: Cow<'static, str>,
    label: Cow<'static, str>,
    dimension: Dimension,
    scale: f64,
}

/// Serialized form of a [`Unit`], checked before it becomes one.
#[derive(Deserialize)]
struct UnitRepr {
    symbol: String,
    label: String,
    dimension: Dimension,
    scale: f64,
}

impl TryFrom<UnitRepr> for Unit {
    type Error = UnitsError;

    fn try_from(repr: UnitRepr) -> Result<Self> {
        let unit = Self {
            symbol: Cow::Owned(repr.symbol),
            label: Cow::Owned(repr.label),
            dimension: repr.dimension,
            scale: repr.scale,
        };
        if unit.symbol.is_empty() && unit.dimension.is_unitless() {
            unit.validate_scale()?;
        } else {
            unit.validate()?;
        }
        Ok(unit)
    }
}

/// Relative tolerance used when matching a composed scale against a catalog unit.
const SCALE_MATCH_TOLERANCE: f64 = 1e-9;

impl Unit {
    /// Declares a unit with a static symbol and label.
    ///
    /// Used for the built-in catalog; prefer [`Unit::custom`] for runtime definitions.
    pub const fn new(
        symbol: &'static str,
        label: &'static str,
        dimension: Dimension,
        scale: f64,
    ) -> Self {
        Self {
            symbol: Cow::Borrowed(symbol),
            label: Cow::Borrowed(label),
            dimension,
            scale,
        }
    }

    /// Creates a validated unit at runtime.
    ///
    /// ```rust
    /// use structunits_core::{Dimension, Unit};
    ///
    /// let yard = Unit::custom("yd", "yard", Dimension::LENGTH, 0.9144).unwrap();
    /// assert_eq!(yard.symbol(), "yd");
    /// assert!(Unit::custom("yd", "yard", Dimension::LENGTH, 0.0).is_err());
    /// ```
    pub fn custom(
        symbol: impl Into<String>,
        label: impl Into<String>,
        dimension: Dimension,
        scale: f64,
    ) -> Result<Self> {
        let unit = Self {
            symbol: Cow::Owned(symbol.into()),
            label: Cow::Owned(label.into()),
            dimension,
            scale,
        };
        unit.validate()?;
        Ok(unit)
    }

    fn composite(symbol: String, dimension: Dimension, scale: f64) -> Self {
        Self {
            label: Cow::Owned(symbol.clone()),
            symbol: Cow::Owned(symbol),
            dimension,
            scale,
        }
    }

    /// Catalog unit for `dimension` and `scale`, or a synthesized one named by `symbol`.
    fn composed(
        dimension: Option<Dimension>,
        scale: f64,
        operation: &str,
        symbol: impl FnOnce() -> String,
    ) -> Result<Unit> {
        let dimension = dimension.ok_or_else(|| {
            UnitsError::InvalidArgument(format!("dimension exponent overflow in {operation}"))
        })?;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(UnitsError::InvalidArgument(format!(
                "scale of {operation} is out of range: {scale}"
            )));
        }
        if let Some(unit) = units::find_equivalent(dimension, scale) {
            return Ok(unit.clone());
        }
        Ok(Self::composite(symbol(), dimension, scale))
    }

    /// Checks the invariants required of a named unit.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.is_empty() {
            return Err(UnitsError::InvalidUnit("symbol must not be empty".into()));
        }
        if self.symbol.chars().any(char::is_whitespace) {
            return Err(UnitsError::InvalidUnit(format!(
                "symbol '{}' must not contain whitespace",
                self.symbol
            )));
        }
        self.validate_scale()
    }

    fn validate_scale(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(UnitsError::InvalidUnit(format!(
                "scale of '{}' must be finite and positive, got {}",
                self.symbol, self.scale
            )));
        }
        Ok(())
    }

    /// Printable symbol.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Human-readable name.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Dimension this unit measures.
    #[inline]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Factor converting a value in this unit into the canonical SI unit.
    #[inline]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns `true` when both units measure the same dimension.
    #[inline]
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Factor `k` such that `v` in `self` equals `v * k` in `target`.
    pub fn conversion_factor_to(&self, target: &Unit) -> Result<f64> {
        UnitsError::ensure_same(target.dimension, self.dimension)?;
        Ok(self.scale / target.scale)
    }

    /// The canonical SI unit of `dimension` (`N`, `m` and `s` raised to the dimension's exponents).
    ///
    /// ```rust
    /// use structunits_core::{Dimension, Unit};
    ///
    /// assert_eq!(Unit::base(Dimension::STRESS).symbol(), "Pa");
    /// assert_eq!(Unit::base(Dimension::new(2, 1, 0)).symbol(), "N^2·m");
    /// ```
    pub fn base(dimension: Dimension) -> Unit {
        if let Some(unit) = units::find_equivalent(dimension, 1.0) {
            return unit.clone();
        }
        let parts: Vec<String> = [
            ("N", dimension.force()),
            ("m", dimension.length()),
            ("s", dimension.time()),
        ]
        .into_iter()
        .filter(|(_, exp)| *exp != 0)
        .map(|(base, exp)| {
            if exp == 1 {
                base.to_string()
            } else {
                format!("{base}^{exp}")
            }
        })
        .collect();
        Self::composite(parts.join("·"), dimension, 1.0)
    }

    /// Unit of the product of a quantity in `self` and a quantity in `other`.
    ///
    /// A built-in unit with the same dimension and scale is preferred; otherwise the symbol is `self·other`.
    /// Fails with [`UnitsError::InvalidArgument`] when a dimension exponent or the scale leaves its range.
    ///
    /// ```rust
    /// use structunits_core::length::{FOOT, INCH};
    /// use structunits_core::force::KIP;
    ///
    /// assert_eq!(INCH.product(&INCH).unwrap().symbol(), "in²");
    /// assert_eq!(KIP.product(&FOOT).unwrap().symbol(), "k-ft");
    /// ```
    pub fn product(&self, other: &Unit) -> Result<Unit> {
        Self::composed(
            self.dimension.checked_mul(other.dimension),
            self.scale * other.scale,
            "product",
            || match (self.symbol.is_empty(), other.symbol.is_empty()) {
                (true, true) => String::new(),
                (true, false) => other.symbol.to_string(),
                (false, true) => self.symbol.to_string(),
                (false, false) => format!("{}·{}", grouped(self, '/'), grouped(other, '/')),
            },
        )
    }

    /// Unit of the quotient of a quantity in `self` by a quantity in `other`.
    ///
    /// ```rust
    /// use structunits_core::area::SQUARE_INCH;
    /// use structunits_core::force::POUND;
    /// use structunits_core::length::METER;
    /// use structunits_core::time::SECOND;
    ///
    /// assert_eq!(POUND.quotient(&SQUARE_INCH).unwrap().symbol(), "psi");
    /// assert_eq!(METER.quotient(&SECOND).unwrap().symbol(), "m/s");
    /// ```
    pub fn quotient(&self, other: &Unit) -> Result<Unit> {
        Self::composed(
            self.dimension.checked_div(other.dimension),
            self.scale / other.scale,
            "quotient",
            || {
                let numerator = if self.symbol.is_empty() {
                    "1".to_string()
                } else {
                    grouped(self, '/')
                };
                if other.symbol.is_empty() {
                    numerator
                } else {
                    format!("{numerator}/{}", grouped_any(other))
                }
            },
        )
    }

    /// Unit raised to an integer power.
    ///
    /// ```rust
    /// use structunits_core::length::FOOT;
    ///
    /// assert_eq!(FOOT.powi(3).unwrap().symbol(), "ft³");
    /// assert_eq!(FOOT.powi(-1).unwrap().symbol(), "ft^-1");
    /// assert!(FOOT.powi(i32::MAX).is_err());
    /// ```
    pub fn powi(&self, n: i32) -> Result<Unit> {
        match n {
            0 => Ok(UNITLESS),
            1 => Ok(self.clone()),
            _ => Self::composed(
                self.dimension.checked_powi(n),
                self.scale.powi(n),
                "power",
                || {
                    if self.symbol.is_empty() {
                        String::new()
                    } else {
                        format!("{}^{n}", grouped_any(self))
                    }
                },
            ),
        }
    }
}

/// Wraps the symbol in parentheses when it contains `sep`.
fn grouped(unit: &Unit, sep: char) -> String {
    if unit.symbol.contains(sep) {
        format!("({})", unit.symbol)
    } else {
        unit.symbol.to_string()
    }
}

/// Wraps the symbol in parentheses when it is itself a composite.
fn grouped_any(unit: &Unit) -> String {
    if unit.symbol.contains(['·', '/', '^']) {
        format!("({})", unit.symbol)
    } else {
        unit.symbol.to_string()
    }
}

/// Returns `true` when two scales agree to within the catalog matching tolerance.
pub(crate) fn scales_match(a: f64, b: f64) -> bool {
    ((a - b) / b).abs() <= SCALE_MATCH_TOLERANCE
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.symbol == other.symbol && self.scale == other.scale
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol)
    }
}
