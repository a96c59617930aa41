//! Error types for quantity operations.

use crate::dimension::Dimension;

/// Result type for quantity operations.
pub type Result<T> = std::result::Result<T, UnitsError>;

/// Errors raised by conversions, arithmetic, the unit registry and configuration loading.
///
/// Every error is raised at the point of violation; nothing is recovered silently.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitsError {
    /// The operation requires matching dimensions but the operands differ.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension of the receiver (or of the first operand).
        expected: Dimension,
        /// Dimension of the offending operand.
        found: Dimension,
    },

    /// Division by a zero scalar or a zero-magnitude quantity.
    #[error("Division by zero")]
    DivisionByZero,

    /// An n-th root was requested for a dimension whose exponents are not multiples of n.
    #[error("Root of degree {degree} is not defined for dimension {dimension}")]
    NonIntegralRoot {
        /// Requested root degree.
        degree: u32,
        /// Dimension of the radicand.
        dimension: Dimension,
    },

    /// An argument is outside the domain of the operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Ordering is undefined, typically because a magnitude is NaN.
    #[error("Quantities are not comparable: {0}")]
    NotComparable(String),

    /// An envelope or extremum was requested over no values.
    #[error("Expected at least one value")]
    EmptyInput,

    /// No unit is registered under the given symbol.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// A unit definition violates the unit invariants.
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    /// A different unit is already registered under the given symbol.
    #[error("Duplicate unit: {0}")]
    DuplicateUnit(String),

    /// Text could not be parsed as a quantity.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl UnitsError {
    /// Build a [`UnitsError::DimensionMismatch`] unless both dimensions agree.
    pub(crate) fn ensure_same(expected: Dimension, found: Dimension) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(UnitsError::DimensionMismatch { expected, found })
        }
    }
}
