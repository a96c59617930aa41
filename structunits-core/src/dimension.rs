//! Dimension algebra.
//!
//! A [`Dimension`] is a triple of integer exponents over the structural base dimensions force (F), length (L) and
//! time (T). Multiplying quantities adds exponents, dividing subtracts them. Derived dimensions such as area are not
//! declared separately: `LENGTH × LENGTH == AREA` simply because both are `L^2`.
//!
//! Exponent arithmetic is checked, like the `checked_*` methods on the integer types: an exponent that would leave the
//! `i32` range yields `None` instead of wrapping.
//!
//! ```rust
//! use structunits_core::{Dimension, DimensionKind};
//!
//! let area = Dimension::LENGTH.checked_mul(Dimension::LENGTH).unwrap();
//! assert_eq!(area, Dimension::AREA);
//! assert_eq!(area.kind(), DimensionKind::Area);
//! assert_eq!(Dimension::MOMENT.checked_div(Dimension::LENGTH), Some(Dimension::FORCE));
//! assert_eq!(Dimension::new(0, i32::MAX, 0).checked_mul(Dimension::LENGTH), None);
//! ```

use crate::units::{METERS_PER_INCH, NEWTONS_PER_KIP};
use core::fmt::{Display, Formatter, Result};
use serde::{Deserialize, Serialize};

/// Exponents of force, length and time describing a physical dimension.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Dimension {
    force: i32,
    length: i32,
    time: i32,
}

impl Dimension {
    /// Dimensionless (`1`).
    pub const UNITLESS: Self = Self::new(0, 0, 0);
    /// Length (`L`).
    pub const LENGTH: Self = Self::new(0, 1, 0);
    /// Area (`L^2`).
    pub const AREA: Self = Self::new(0, 2, 0);
    /// Volume, or first moment of area (`L^3`).
    pub const LENGTH_CUBED: Self = Self::new(0, 3, 0);
    /// Second moment of area (`L^4`).
    pub const LENGTH_TO_THE_4TH: Self = Self::new(0, 4, 0);
    /// Warping constant (`L^6`).
    pub const LENGTH_TO_THE_6TH: Self = Self::new(0, 6, 0);
    /// Force (`F`).
    pub const FORCE: Self = Self::new(1, 0, 0);
    /// Moment (`F·L`).
    pub const MOMENT: Self = Self::new(1, 1, 0);
    /// Distributed load (`F·L^-1`).
    pub const FORCE_PER_LENGTH: Self = Self::new(1, -1, 0);
    /// Stress or pressure (`F·L^-2`).
    pub const STRESS: Self = Self::new(1, -2, 0);
    /// Weight density (`F·L^-3`).
    pub const DENSITY: Self = Self::new(1, -3, 0);
    /// Flexural stiffness (`F·L^2`).
    pub const FLEXURAL_STIFFNESS: Self = Self::new(1, 2, 0);
    /// Time (`T`).
    pub const TIME: Self = Self::new(0, 0, 1);
    /// Acceleration (`L·T^-2`).
    pub const ACCELERATION: Self = Self::new(0, 1, -2);

    /// Creates a dimension from its force, length and time exponents.
    #[inline]
    pub const fn new(force: i32, length: i32, time: i32) -> Self {
        Self {
            force,
            length,
            time,
        }
    }

    /// Exponent of force.
    #[inline]
    pub const fn force(&self) -> i32 {
        self.force
    }

    /// Exponent of length.
    #[inline]
    pub const fn length(&self) -> i32 {
        self.length
    }

    /// Exponent of time.
    #[inline]
    pub const fn time(&self) -> i32 {
        self.time
    }

    /// Returns `true` when every exponent is zero.
    #[inline]
    pub const fn is_unitless(&self) -> bool {
        self.force == 0 && self.length == 0 && self.time == 0
    }

    /// Dimension of a product (exponents added), or `None` on exponent overflow.
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        match (
            self.force.checked_add(rhs.force),
            self.length.checked_add(rhs.length),
            self.time.checked_add(rhs.time),
        ) {
            (Some(force), Some(length), Some(time)) => Some(Self::new(force, length, time)),
            _ => None,
        }
    }

    /// Dimension of a quotient (exponents subtracted), or `None` on exponent overflow.
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        match (
            self.force.checked_sub(rhs.force),
            self.length.checked_sub(rhs.length),
            self.time.checked_sub(rhs.time),
        ) {
            (Some(force), Some(length), Some(time)) => Some(Self::new(force, length, time)),
            _ => None,
        }
    }

    /// Dimension of a reciprocal (exponents negated), or `None` on exponent overflow.
    pub const fn checked_recip(self) -> Option<Self> {
        Self::UNITLESS.checked_div(self)
    }

    /// Raises the dimension to an integer power, or `None` on exponent overflow.
    ///
    /// ```rust
    /// use structunits_core::Dimension;
    /// assert_eq!(Dimension::LENGTH.checked_powi(3), Some(Dimension::LENGTH_CUBED));
    /// assert_eq!(Dimension::AREA.checked_powi(i32::MAX), None);
    /// ```
    pub const fn checked_powi(self, n: i32) -> Option<Self> {
        match (
            self.force.checked_mul(n),
            self.length.checked_mul(n),
            self.time.checked_mul(n),
        ) {
            (Some(force), Some(length), Some(time)) => Some(Self::new(force, length, time)),
            _ => None,
        }
    }

    /// Takes the `n`-th root, or `None` when an exponent is not a multiple of `n`.
    ///
    /// ```rust
    /// use structunits_core::Dimension;
    /// assert_eq!(Dimension::AREA.root(2), Some(Dimension::LENGTH));
    /// assert_eq!(Dimension::LENGTH.root(2), None);
    /// ```
    pub fn root(self, n: u32) -> Option<Self> {
        let n = i32::try_from(n).ok().filter(|n| *n != 0)?;
        if self.force % n != 0 || self.length % n != 0 || self.time % n != 0 {
            return None;
        }
        Some(Self::new(self.force / n, self.length / n, self.time / n))
    }

    /// Named classification of this dimension.
    pub fn kind(&self) -> DimensionKind {
        match *self {
            Self::UNITLESS => DimensionKind::Unitless,
            Self::LENGTH => DimensionKind::Length,
            Self::AREA => DimensionKind::Area,
            Self::LENGTH_CUBED => DimensionKind::LengthCubed,
            Self::LENGTH_TO_THE_4TH => DimensionKind::LengthToThe4th,
            Self::LENGTH_TO_THE_6TH => DimensionKind::LengthToThe6th,
            Self::FORCE => DimensionKind::Force,
            Self::MOMENT => DimensionKind::Moment,
            Self::FORCE_PER_LENGTH => DimensionKind::ForcePerLength,
            Self::STRESS => DimensionKind::Stress,
            Self::DENSITY => DimensionKind::Density,
            Self::FLEXURAL_STIFFNESS => DimensionKind::FlexuralStiffness,
            Self::TIME => DimensionKind::Time,
            Self::ACCELERATION => DimensionKind::Acceleration,
            _ => DimensionKind::Undefined,
        }
    }

    /// Default absolute tolerance, in SI base units, used by `Quantity`'s `PartialEq`.
    ///
    /// Structural families use engineering-sized tolerances (a thousandth of an inch for lengths, a ten-thousandth
    /// of a kip for forces, …); everything else compares to within `1e-10`.
    pub fn equality_tolerance(&self) -> f64 {
        let inch = METERS_PER_INCH;
        let kip = NEWTONS_PER_KIP;
        match self.kind() {
            DimensionKind::Length => 1e-3 * inch,
            DimensionKind::Area => 1e-3 * inch * inch,
            DimensionKind::LengthCubed => 1e-3 * inch * inch * inch,
            DimensionKind::LengthToThe4th => 1e-3 * inch * inch * inch * inch,
            DimensionKind::Force => 1e-4 * kip,
            DimensionKind::Moment => 1e-2 * kip * inch,
            DimensionKind::ForcePerLength => 1e-4 * kip / inch,
            DimensionKind::Stress => 1e-4 * kip / (inch * inch),
            _ => 1e-10,
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let parts: Vec<String> = [("F", self.force), ("L", self.length), ("T", self.time)]
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

        if parts.is_empty() {
            f.write_str("1")
        } else {
            f.write_str(&parts.join("·"))
        }
    }
}

/// Named dimension families.
///
/// Any exponent combination without a name classifies as [`DimensionKind::Undefined`]; such dimensions are still
/// fully usable, they just have no built-in units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKind {
    /// `1`
    Unitless,
    /// `L`
    Length,
    /// `L^2`
    Area,
    /// `L^3`
    LengthCubed,
    /// `L^4`
    LengthToThe4th,
    /// `L^6`
    LengthToThe6th,
    /// `F`
    Force,
    /// `F·L`
    Moment,
    /// `F·L^-1`
    ForcePerLength,
    /// `F·L^-2`
    Stress,
    /// `F·L^-3`
    Density,
    /// `F·L^2`
    FlexuralStiffness,
    /// `T`
    Time,
    /// `L·T^-2`
    Acceleration,
    /// Any other combination.
    Undefined,
}

impl DimensionKind {
    /// Human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unitless => "unitless",
            Self::Length => "length",
            Self::Area => "area",
            Self::LengthCubed => "length cubed",
            Self::LengthToThe4th => "length to the 4th",
            Self::LengthToThe6th => "length to the 6th",
            Self::Force => "force",
            Self::Moment => "moment",
            Self::ForcePerLength => "force per length",
            Self::Stress => "stress",
            Self::Density => "density",
            Self::FlexuralStiffness => "flexural stiffness",
            Self::Time => "time",
            Self::Acceleration => "acceleration",
            Self::Undefined => "undefined",
        }
    }
}

impl Display for DimensionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}
