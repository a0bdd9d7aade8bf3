//! Unit registry and conversion constants
//!
//! Maps every unit name a recipe line may use to the number of base units
//! (kilograms or litres) one of that unit represents.

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants (to kilograms / litres)
// ============================================================================

/// Kilograms per gram
pub const KG_PER_GRAM: f64 = 0.001;
/// Litres per millilitre
pub const L_PER_ML: f64 = 0.001;
/// Base units per kilogram or litre
pub const BASE_PER_KG_L: f64 = 1.0;
/// Litres per cup (metric cup)
pub const L_PER_CUP: f64 = 0.25;
/// Litres per tablespoon
pub const L_PER_TBSP: f64 = 0.015;
/// Litres per teaspoon
pub const L_PER_TSP: f64 = 0.005;

/// Name of the discrete-count unit
pub const DISCRETE_UNIT: &str = "unit";

/// How a unit is turned into base units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "factor")]
pub enum Conversion {
    /// Fixed multiplier: base units per one of this unit
    Scalar(f64),
    /// Defer to the ingredient's weight per discrete unit
    IngredientWeight,
}

/// A single registry row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEntry {
    pub name: &'static str,
    pub conversion: Conversion,
}

const STANDARD_UNITS: &[UnitEntry] = &[
    UnitEntry { name: "grams", conversion: Conversion::Scalar(KG_PER_GRAM) },
    UnitEntry { name: "ml", conversion: Conversion::Scalar(L_PER_ML) },
    UnitEntry { name: "kg/L", conversion: Conversion::Scalar(BASE_PER_KG_L) },
    UnitEntry { name: "cups", conversion: Conversion::Scalar(L_PER_CUP) },
    UnitEntry { name: "tablespoons", conversion: Conversion::Scalar(L_PER_TBSP) },
    UnitEntry { name: "teaspoons", conversion: Conversion::Scalar(L_PER_TSP) },
    UnitEntry { name: DISCRETE_UNIT, conversion: Conversion::IngredientWeight },
];

/// Read-only table of known units
///
/// Lookups match the unit name exactly, so `"kg/L"` and `"kg/l"` are
/// different keys.
#[derive(Debug, Clone, Copy)]
pub struct UnitRegistry {
    entries: &'static [UnitEntry],
}

impl UnitRegistry {
    /// The process-wide standard registry
    pub const fn standard() -> Self {
        Self { entries: STANDARD_UNITS }
    }

    /// Known unit names, in display order
    pub fn unit_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn entries(&self) -> &'static [UnitEntry] {
        self.entries
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.conversion(unit).is_some()
    }

    /// Get the conversion for a unit name
    pub fn conversion(&self, unit: &str) -> Option<Conversion> {
        self.entries
            .iter()
            .find(|e| e.name == unit)
            .map(|e| e.conversion)
    }

    /// Get the base-unit factor for a non-discrete unit
    ///
    /// Returns None for the discrete unit and for unknown names.
    pub fn factor(&self, unit: &str) -> Option<f64> {
        match self.conversion(unit)? {
            Conversion::Scalar(factor) => Some(factor),
            Conversion::IngredientWeight => None,
        }
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
