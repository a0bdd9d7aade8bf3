//! Costing document
//!
//! A JSON file holding the pantry and the recipes to cost, in the shape the
//! household's existing records export to.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::CostingError;
use crate::models::{InMemoryPantry, Ingredient, LineInput, Pantry, Recipe};

/// Document loading errors
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Costing(#[from] CostingError),
}

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// A recipe as entered, before its lines are normalized
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub id: i64,
    pub title: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub lines: Vec<LineInput>,
}

fn default_servings() -> u32 {
    1
}

/// The on-disk document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostDocument {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub recipes: Vec<RecipeDraft>,
}

impl CostDocument {
    pub fn from_json(json: &str) -> DocumentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> DocumentResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn pantry(&self) -> InMemoryPantry {
        self.ingredients.iter().cloned().collect()
    }
}

impl RecipeDraft {
    /// Build a recipe, normalizing every line against the pantry
    pub fn build<P: Pantry + ?Sized>(&self, pantry: &P) -> Result<Recipe, CostingError> {
        let mut recipe = Recipe::new(self.id, self.title.clone(), self.servings)?
            .with_method(self.method.clone());

        for input in &self.lines {
            let ingredient = pantry.ingredient(input.ingredient_id).ok_or(
                CostingError::MissingIngredientReference {
                    recipe_id: self.id,
                    ingredient_id: input.ingredient_id,
                },
            )?;
            ingredient.validate()?;
            recipe.add_line(ingredient, input.quantity, input.unit.clone())?;
        }

        Ok(recipe)
    }
}
