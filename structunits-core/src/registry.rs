//! Runtime unit registry.
//!
//! A [`UnitRegistry`] maps symbols and aliases to [`Unit`]s. It starts from the built-in catalog and accepts extension
//! units at runtime, either programmatically or through [`UnitsConfig`](crate::UnitsConfig).
//!
//! # Conversion formula
//!
//! ```text
//! v_canonical = v_src * src.scale
//! v_dst = v_canonical / dst.scale
//! ```
//!
//! # Lookup order
//!
//! 1. Exact unit symbol.
//! 2. Exact alias.
//! 3. Case-insensitive match over symbols and aliases, accepted only when it resolves to a single unit.

use crate::dimension::Dimension;
use crate::error::{Result, UnitsError};
use crate::quantity::{split_quantity_text, Quantity};
use crate::unit::Unit;
use crate::units;
use std::collections::BTreeMap;

/// Aliases installed by [`UnitRegistry::with_builtin`], as `(alias, symbol)` pairs.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    // force
    ("kips", "kip"),
    ("k", "kip"),
    ("lbs", "lb"),
    ("pound", "lb"),
    ("pounds", "lb"),
    // length
    ("inch", "in"),
    ("inches", "in"),
    ("foot", "ft"),
    ("feet", "ft"),
    ("meter", "m"),
    ("meters", "m"),
    ("millimeters", "mm"),
    ("centimeters", "cm"),
    // area
    ("in2", "in²"),
    ("ft2", "ft²"),
    ("mm2", "mm²"),
    ("cm2", "cm²"),
    ("m2", "m²"),
    ("sq_in", "in²"),
    ("sq_ft", "ft²"),
    ("sq_mm", "mm²"),
    ("sq_cm", "cm²"),
    ("sq_m", "m²"),
    // length cubed
    ("in3", "in³"),
    ("ft3", "ft³"),
    ("mm3", "mm³"),
    ("cm3", "cm³"),
    ("m3", "m³"),
    // length to the 4th
    ("in4", "in⁴"),
    ("ft4", "ft⁴"),
    ("mm4", "mm⁴"),
    ("cm4", "cm⁴"),
    ("m4", "m⁴"),
    // moment
    ("kip-in", "k-in"),
    ("kip-ft", "k-ft"),
    ("lb_in", "lb-in"),
    ("lb_ft", "lb-ft"),
    ("k_in", "k-in"),
    ("k_ft", "k-ft"),
    ("N_m", "N-m"),
    ("kN_m", "kN-m"),
    ("N_mm", "N-mm"),
    ("kN_mm", "kN-mm"),
    // force per length
    ("kip/in", "k/in"),
    ("kip/ft", "k/ft"),
    ("plf", "lb/ft"),
    ("klf", "k/ft"),
    // time
    ("sec", "s"),
    ("hr", "h"),
];

/// Symbol and alias table for unit lookup.
///
/// Ordering is deterministic (`BTreeMap`), so iteration over [`UnitRegistry::units`] is sorted by symbol.
///
/// ```rust
/// use structunits_core::UnitRegistry;
///
/// let registry = UnitRegistry::with_builtin();
/// let inches = registry.convert_value(1.0, "feet", "in").unwrap();
/// assert!((inches - 12.0).abs() < 1e-12);
///
/// let q = registry.parse_quantity("2.5 KSI").unwrap();
/// assert_eq!(q.unit().symbol(), "ksi");
/// ```
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: BTreeMap<String, Unit>,
    aliases: BTreeMap<String, String>,
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl UnitRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            units: BTreeMap::new(),
            aliases: BTreeMap::new(),
        }
    }

    /// Every built-in unit plus the standard aliases (`feet`, `kips`, `sq_in`, …).
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for unit in units::builtin() {
            registry
                .units
                .insert(unit.symbol().to_string(), unit.clone());
        }
        for (alias, symbol) in BUILTIN_ALIASES {
            registry
                .aliases
                .insert((*alias).to_string(), (*symbol).to_string());
        }
        registry
    }

    /// Number of registered units (aliases excluded).
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// `true` when no unit is registered.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Registered units, sorted by symbol.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// Registered units measuring `dimension`, sorted by symbol.
    pub fn units_of(&self, dimension: Dimension) -> Vec<&Unit> {
        self.units
            .values()
            .filter(|unit| unit.dimension() == dimension)
            .collect()
    }

    /// Adds `unit` under its symbol.
    ///
    /// Registering an identical unit again is a no-op.
    ///
    /// # Errors
    ///
    /// * [`UnitsError::InvalidUnit`] when the unit violates the unit invariants.
    /// * [`UnitsError::DuplicateUnit`] when the symbol is taken by a different unit or by an alias.
    pub fn register(&mut self, unit: Unit) -> Result<()> {
        unit.validate()?;
        let symbol = unit.symbol().to_string();
        if let Some(existing) = self.units.get(&symbol) {
            if *existing == unit {
                log::debug!("Unit '{}' already registered", symbol);
                return Ok(());
            }
            return Err(UnitsError::DuplicateUnit(symbol));
        }
        if self.aliases.contains_key(&symbol) {
            return Err(UnitsError::DuplicateUnit(symbol));
        }
        log::debug!(
            "Registering unit '{}' ({}) with dimension {} and scale {}",
            symbol,
            unit.label(),
            unit.dimension(),
            unit.scale()
        );
        self.units.insert(symbol, unit);
        Ok(())
    }

    /// Makes `alias` resolve to the unit registered under `symbol` (itself a symbol or an alias).
    ///
    /// # Errors
    ///
    /// * [`UnitsError::UnknownUnit`] when `symbol` does not resolve exactly.
    /// * [`UnitsError::DuplicateUnit`] when `alias` already names a different unit.
    /// * [`UnitsError::InvalidUnit`] when `alias` is empty or contains whitespace.
    pub fn register_alias(&mut self, alias: &str, symbol: &str) -> Result<()> {
        if alias.is_empty() || alias.chars().any(char::is_whitespace) {
            return Err(UnitsError::InvalidUnit(format!("invalid alias '{alias}'")));
        }
        let target = self
            .resolve_exact(symbol)
            .map(|unit| unit.symbol().to_string())
            .ok_or_else(|| UnitsError::UnknownUnit(symbol.to_string()))?;

        if let Some(unit) = self.units.get(alias) {
            if unit.symbol() == target {
                return Ok(());
            }
            return Err(UnitsError::DuplicateUnit(alias.to_string()));
        }
        match self.aliases.get(alias) {
            Some(existing) if *existing == target => Ok(()),
            Some(_) => Err(UnitsError::DuplicateUnit(alias.to_string())),
            None => {
                log::debug!("Registering alias '{}' for '{}'", alias, target);
                self.aliases.insert(alias.to_string(), target);
                Ok(())
            }
        }
    }

    fn resolve_exact(&self, symbol: &str) -> Option<&Unit> {
        self.units.get(symbol).or_else(|| {
            self.aliases
                .get(symbol)
                .and_then(|target| self.units.get(target))
        })
    }

    /// Looks up a unit by symbol or alias.
    ///
    /// Exact matches win; otherwise a case-insensitive match is accepted when it is unambiguous.
    pub fn get(&self, symbol: &str) -> Result<&Unit> {
        let symbol = symbol.trim();
        if let Some(unit) = self.resolve_exact(symbol) {
            return Ok(unit);
        }

        let mut candidates: Vec<&Unit> = self
            .units
            .keys()
            .chain(self.aliases.keys())
            .filter(|key| key.to_lowercase() == symbol.to_lowercase())
            .filter_map(|key| self.resolve_exact(key))
            .collect();
        candidates.sort_by(|a, b| a.symbol().cmp(b.symbol()));
        candidates.dedup_by(|a, b| a.symbol() == b.symbol());

        match candidates.as_slice() {
            [unit] => Ok(*unit),
            [] => Err(UnitsError::UnknownUnit(symbol.to_string())),
            _ => {
                log::warn!(
                    "Ambiguous unit '{}' matches {} units ignoring case",
                    symbol,
                    candidates.len()
                );
                Err(UnitsError::UnknownUnit(symbol.to_string()))
            }
        }
    }

    /// `true` when `symbol` resolves to a unit.
    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_ok()
    }

    /// `true` when both symbols resolve to units of the same dimension. Unknown symbols are never compatible.
    pub fn compatible(&self, a: &str, b: &str) -> bool {
        match (self.get(a), self.get(b)) {
            (Ok(ua), Ok(ub)) => ua.is_compatible(ub),
            _ => false,
        }
    }

    /// Converts `value` from the unit named `src` into the unit named `dst`.
    ///
    /// # Errors
    ///
    /// * [`UnitsError::UnknownUnit`] when either symbol does not resolve.
    /// * [`UnitsError::DimensionMismatch`] when the units measure different dimensions.
    pub fn convert_value(&self, value: f64, src: &str, dst: &str) -> Result<f64> {
        let src = self.get(src)?;
        let dst = self.get(dst)?;
        if src == dst {
            return Ok(value);
        }
        Ok(value * src.conversion_factor_to(dst)?)
    }

    /// Builds a [`Quantity`] in `symbol`.
    pub fn quantity(&self, value: f64, symbol: &str) -> Result<Quantity> {
        Ok(Quantity::new(value, self.get(symbol)?.clone()))
    }

    /// Parses `"<number> <symbol>"`; a bare number is unitless.
    pub fn parse_quantity(&self, text: &str) -> Result<Quantity> {
        let (value, symbol) = split_quantity_text(text)?;
        self.quantity(value, symbol)
    }
}
