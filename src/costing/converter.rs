//! Quantity normalization
//!
//! Converts a user-entered quantity into base units (kilograms or litres).

use serde::Serialize;

use super::units::{Conversion, UnitRegistry};

/// What the conversion was based on
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ConversionBasis {
    /// Registry factor for a known unit
    Factor(f64),
    /// Ingredient's weight per discrete unit
    IngredientWeight(f64),
    /// Discrete unit with no ingredient weight; treated as 1 kg per unit
    MissingIngredientWeight,
    /// Unit not in the registry; quantity taken as already in base units
    UnknownUnit,
}

/// A quantity expressed in base units, tagged with how it was derived
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Normalized {
    pub base_quantity: f64,
    pub basis: ConversionBasis,
}

impl Normalized {
    /// True when a default multiplier of 1 stood in for real conversion data
    pub fn is_fallback(&self) -> bool {
        matches!(
            self.basis,
            ConversionBasis::MissingIngredientWeight | ConversionBasis::UnknownUnit
        )
    }
}

/// Normalize a quantity using the standard registry
pub fn normalize(quantity: f64, unit: &str, discrete_weight: Option<f64>) -> Normalized {
    normalize_with(&UnitRegistry::standard(), quantity, unit, discrete_weight)
}

/// Normalize a quantity against a specific registry
///
/// `discrete_weight` is only consulted when the unit defers to the
/// ingredient's weight. A weight of zero counts as not entered.
pub fn normalize_with(
    registry: &UnitRegistry,
    quantity: f64,
    unit: &str,
    discrete_weight: Option<f64>,
) -> Normalized {
    let discrete_weight = discrete_weight.filter(|w| *w != 0.0 && !w.is_nan());

    match registry.conversion(unit) {
        Some(Conversion::Scalar(factor)) => Normalized {
            base_quantity: quantity * factor,
            basis: ConversionBasis::Factor(factor),
        },
        Some(Conversion::IngredientWeight) => match discrete_weight {
            Some(weight) => Normalized {
                base_quantity: quantity * weight,
                basis: ConversionBasis::IngredientWeight(weight),
            },
            None => {
                tracing::warn!(
                    "No weight per '{}' for this ingredient. Treating {} {} as {} kg.",
                    unit,
                    quantity,
                    unit,
                    quantity
                );
                Normalized {
                    base_quantity: quantity,
                    basis: ConversionBasis::MissingIngredientWeight,
                }
            }
        },
        None => {
            tracing::warn!(
                "Unknown unit '{}'. Treating {} as already in base units.",
                unit,
                quantity
            );
            Normalized {
                base_quantity: quantity,
                basis: ConversionBasis::UnknownUnit,
            }
        }
    }
}
