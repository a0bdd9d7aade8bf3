//! Costing error types

use thiserror::Error;

use crate::models::IngredientId;

/// Errors raised while building or costing a recipe
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostingError {
    #[error("Recipe {recipe_id} references missing ingredient {ingredient_id}")]
    MissingIngredientReference { recipe_id: i64, ingredient_id: IngredientId },

    #[error("servings must be at least 1, got {0}")]
    InvalidServings(u32),

    #[error("Quantity for ingredient {ingredient_id} must be a finite non-negative number, got {quantity}")]
    InvalidQuantity { ingredient_id: IngredientId, quantity: f64 },

    #[error("Recipe {recipe_id} has more than one line for ingredient {ingredient_id}")]
    DuplicateLine { recipe_id: i64, ingredient_id: IngredientId },

    #[error("Ingredient {ingredient_id} has invalid {field}: {value}")]
    InvalidIngredient { ingredient_id: IngredientId, field: &'static str, value: f64 },

    #[error("Line for ingredient {ingredient_id} is stale: stored {stored} base units, expected {expected}")]
    StaleLine { ingredient_id: IngredientId, stored: f64, expected: f64 },
}

/// Result type for costing operations
pub type CostingResult<T> = Result<T, CostingError>;
