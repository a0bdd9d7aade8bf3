//! Recipe model
//!
//! A recipe owns its lines; at most one line per ingredient.

use serde::{Deserialize, Serialize};

use crate::error::{CostingError, CostingResult};
use super::{Ingredient, IngredientId, RecipeLine};

/// A recipe with its ingredient lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    servings: u32,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    lines: Vec<RecipeLine>,
}

pub(crate) fn validate_servings(servings: u32) -> CostingResult<u32> {
    if servings < 1 {
        return Err(CostingError::InvalidServings(servings));
    }
    Ok(servings)
}

impl Recipe {
    /// Create an empty recipe
    pub fn new(id: i64, title: impl Into<String>, servings: u32) -> CostingResult<Self> {
        Ok(Self {
            id,
            title: title.into(),
            servings: validate_servings(servings)?,
            method: String::new(),
            lines: Vec::new(),
        })
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn set_servings(&mut self, servings: u32) -> CostingResult<()> {
        self.servings = validate_servings(servings)?;
        Ok(())
    }

    pub fn lines(&self) -> &[RecipeLine] {
        &self.lines
    }

    pub fn line(&self, ingredient_id: IngredientId) -> Option<&RecipeLine> {
        self.lines.iter().find(|l| l.ingredient_id() == ingredient_id)
    }

    pub fn contains(&self, ingredient_id: IngredientId) -> bool {
        self.line(ingredient_id).is_some()
    }

    /// Add an ingredient line
    ///
    /// Returns Ok(false) without touching the recipe if the ingredient is
    /// already present.
    pub fn add_line(
        &mut self,
        ingredient: &Ingredient,
        quantity: f64,
        unit: impl Into<String>,
    ) -> CostingResult<bool> {
        if self.contains(ingredient.id) {
            tracing::debug!(
                recipe_id = self.id,
                ingredient_id = ingredient.id,
                "Ingredient already in recipe, ignoring add"
            );
            return Ok(false);
        }

        let line = RecipeLine::new(ingredient, quantity, unit)?;
        self.lines.push(line);
        Ok(true)
    }

    /// Change a line's quantity and/or unit
    ///
    /// Returns Ok(false) if the recipe has no line for the ingredient.
    pub fn update_line(
        &mut self,
        ingredient: &Ingredient,
        quantity: Option<f64>,
        unit: Option<String>,
    ) -> CostingResult<bool> {
        match self.lines.iter_mut().find(|l| l.ingredient_id() == ingredient.id) {
            Some(line) => {
                line.edit(ingredient, quantity, unit)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the line for an ingredient
    pub fn remove_line(&mut self, ingredient_id: IngredientId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.ingredient_id() != ingredient_id);
        self.lines.len() < before
    }

    /// Re-normalize the line using an ingredient after its record changed
    ///
    /// Returns true if the line existed and its normalized quantity changed.
    pub fn refresh_ingredient(&mut self, ingredient: &Ingredient) -> bool {
        match self.lines.iter_mut().find(|l| l.ingredient_id() == ingredient.id) {
            Some(line) => line.renormalize(ingredient),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn egg() -> Ingredient {
        Ingredient::new(2, "Egg")
            .with_price(9.0)
            .with_energy(600.0)
            .with_discrete_weight(0.05)
    }

    fn milk() -> Ingredient {
        Ingredient::new(3, "Milk").with_price(1.6).with_energy(270.0)
    }

    #[test]
    fn test_rejects_zero_servings() {
        assert_eq!(
            Recipe::new(1, "Omelette", 0).unwrap_err(),
            CostingError::InvalidServings(0)
        );
        let mut recipe = Recipe::new(1, "Omelette", 2).unwrap();
        assert!(recipe.set_servings(0).is_err());
        assert_eq!(recipe.servings(), 2);
    }

    #[test]
    fn test_adding_present_ingredient_is_noop() {
        let mut recipe = Recipe::new(1, "Omelette", 2).unwrap();
        assert!(recipe.add_line(&egg(), 3.0, "unit").unwrap());
        assert!(!recipe.add_line(&egg(), 10.0, "grams").unwrap());

        assert_eq!(recipe.lines().len(), 1);
        let line = recipe.line(2).unwrap();
        assert_eq!(line.quantity(), 3.0);
        assert_eq!(line.unit(), "unit");
    }

    #[test]
    fn test_update_and_remove_lines() {
        let mut recipe = Recipe::new(1, "Omelette", 2).unwrap();
        recipe.add_line(&egg(), 3.0, "unit").unwrap();
        recipe.add_line(&milk(), 0.5, "cups").unwrap();

        assert!(recipe.update_line(&milk(), Some(200.0), Some("ml".to_string())).unwrap());
        assert!((recipe.line(3).unwrap().normalized_quantity() - 0.2).abs() < 1e-12);

        let flour = Ingredient::new(9, "Flour");
        assert!(!recipe.update_line(&flour, Some(1.0), None).unwrap());

        assert!(recipe.remove_line(2));
        assert!(!recipe.remove_line(2));
        assert_eq!(recipe.lines().len(), 1);
    }

    #[test]
    fn test_refresh_after_ingredient_edit() {
        let mut recipe = Recipe::new(1, "Omelette", 2).unwrap();
        recipe.add_line(&egg(), 4.0, "unit").unwrap();
        recipe.add_line(&milk(), 100.0, "ml").unwrap();

        let bigger_egg = egg().with_discrete_weight(0.065);
        assert!(recipe.refresh_ingredient(&bigger_egg));
        assert!((recipe.line(2).unwrap().normalized_quantity() - 0.26).abs() < 1e-12);

        // Milk lines do not depend on the discrete weight
        let milk_with_weight = milk().with_discrete_weight(1.03);
        assert!(!recipe.refresh_ingredient(&milk_with_weight));
    }
}
