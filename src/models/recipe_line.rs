//! Recipe line model
//!
//! One ingredient with its quantity and unit inside a recipe. The normalized
//! quantity is derived and only changes together with its inputs.

use serde::{Deserialize, Serialize};

use crate::costing::{normalize, Normalized};
use crate::error::{CostingError, CostingResult};
use super::{Ingredient, IngredientId};

/// Relative tolerance when comparing a stored normalized quantity
const STALE_TOLERANCE: f64 = 1e-9;

/// A line in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    ingredient_id: IngredientId,
    quantity: f64,
    unit: String,
    normalized_quantity: f64,
}

/// Line data as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineInput {
    pub ingredient_id: IngredientId,
    #[serde(alias = "unit_value")]
    pub quantity: f64,
    #[serde(alias = "unit_type")]
    pub unit: String,
}

fn validate_quantity(ingredient_id: IngredientId, quantity: f64) -> CostingResult<()> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(CostingError::InvalidQuantity { ingredient_id, quantity });
    }
    Ok(())
}

fn convert(ingredient: &Ingredient, quantity: f64, unit: &str) -> Normalized {
    normalize(quantity, unit, ingredient.weight_per_discrete_unit)
}

impl RecipeLine {
    /// Build a line for an ingredient, normalizing the quantity
    pub fn new(ingredient: &Ingredient, quantity: f64, unit: impl Into<String>) -> CostingResult<Self> {
        validate_quantity(ingredient.id, quantity)?;
        let unit = unit.into();
        let normalized = convert(ingredient, quantity, &unit);

        Ok(Self {
            ingredient_id: ingredient.id,
            quantity,
            unit,
            normalized_quantity: normalized.base_quantity,
        })
    }

    pub fn ingredient_id(&self) -> IngredientId {
        self.ingredient_id
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Quantity in kilograms or litres
    pub fn normalized_quantity(&self) -> f64 {
        self.normalized_quantity
    }

    /// Change quantity and/or unit, recomputing the normalized quantity
    pub fn edit(
        &mut self,
        ingredient: &Ingredient,
        quantity: Option<f64>,
        unit: Option<String>,
    ) -> CostingResult<()> {
        let quantity = quantity.unwrap_or(self.quantity);
        validate_quantity(self.ingredient_id, quantity)?;
        let unit = unit.unwrap_or_else(|| self.unit.clone());
        let normalized = convert(ingredient, quantity, &unit);

        tracing::debug!(
            ingredient_id = self.ingredient_id,
            "Line edited: {} {} -> {} {} ({} base units)",
            self.quantity,
            self.unit,
            quantity,
            unit,
            normalized.base_quantity
        );

        self.quantity = quantity;
        self.unit = unit;
        self.normalized_quantity = normalized.base_quantity;
        Ok(())
    }

    /// Recompute from the ingredient's current record
    ///
    /// Returns true if the stored normalized quantity changed.
    pub fn renormalize(&mut self, ingredient: &Ingredient) -> bool {
        let expected = convert(ingredient, self.quantity, &self.unit).base_quantity;
        let changed = expected != self.normalized_quantity;
        self.normalized_quantity = expected;
        changed
    }

    /// Whether the stored normalized quantity matches the conversion
    pub fn is_current(&self, ingredient: &Ingredient) -> bool {
        self.check_current(ingredient).is_ok()
    }

    /// Recompute the conversion and fail if the stored value has drifted
    ///
    /// Also re-checks the quantity, since a line read back from storage never
    /// went through `new` or `edit`.
    pub fn check_current(&self, ingredient: &Ingredient) -> CostingResult<Normalized> {
        validate_quantity(self.ingredient_id, self.quantity)?;
        let normalized = convert(ingredient, self.quantity, &self.unit);
        let expected = normalized.base_quantity;
        let tolerance = STALE_TOLERANCE * expected.abs().max(1.0);

        if ingredient.id != self.ingredient_id
            || (self.normalized_quantity - expected).abs() > tolerance
        {
            return Err(CostingError::StaleLine {
                ingredient_id: self.ingredient_id,
                stored: self.normalized_quantity,
                expected,
            });
        }
        Ok(normalized)
    }
}
