//! Recipe costing
//!
//! Derives line cost and energy from normalized quantities and rolls them up
//! into recipe totals and per-serving figures.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{CostingError, CostingResult};
use crate::models::{
    validate_servings, Ingredient, IngredientId, LineFigures, Pantry, Recipe, RecipeLine,
    RecipeTotals,
};
use super::ConversionBasis;

/// Converts "kJ per 100 g" into "kJ per kg" (1000 g / 100 g)
pub const PER_100G_TO_PER_KG: f64 = 10.0;

/// Cost of a base-unit quantity of an ingredient
pub fn line_cost(normalized_quantity: f64, ingredient: &Ingredient) -> f64 {
    normalized_quantity * ingredient.price_per_base_unit
}

/// Energy in kJ of a base-unit quantity of an ingredient
pub fn line_energy_kj(normalized_quantity: f64, ingredient: &Ingredient) -> f64 {
    normalized_quantity * PER_100G_TO_PER_KG * ingredient.energy_per_100g
}

pub fn line_figures(normalized_quantity: f64, ingredient: &Ingredient) -> LineFigures {
    LineFigures {
        line_cost: line_cost(normalized_quantity, ingredient),
        line_energy_kj: line_energy_kj(normalized_quantity, ingredient),
    }
}

/// Divide summed figures across servings
pub fn per_serving(sum: LineFigures, servings: u32) -> CostingResult<RecipeTotals> {
    let servings = f64::from(validate_servings(servings)?);

    Ok(RecipeTotals {
        total_cost: sum.line_cost,
        total_energy_kj: sum.line_energy_kj,
        cost_per_serving: sum.line_cost / servings,
        energy_per_serving_kj: sum.line_energy_kj / servings,
    })
}

/// A line with its ingredient resolved and its figures derived
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostedLine {
    pub ingredient_id: IngredientId,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub normalized_quantity: f64,
    pub basis: ConversionBasis,
    /// False when the ingredient has no price entered
    pub priced: bool,
    #[serde(flatten)]
    pub figures: LineFigures,
}

/// Full costing breakdown for a recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCosting {
    pub recipe_id: i64,
    pub title: String,
    pub servings: u32,
    pub lines: Vec<CostedLine>,
    pub totals: RecipeTotals,
}

/// Resolve a line's ingredient and derive its figures
///
/// Fails if the ingredient is gone, its rates are negative, or the stored
/// normalized quantity no longer matches the ingredient's record.
pub fn cost_line<P: Pantry + ?Sized>(
    recipe_id: i64,
    line: &RecipeLine,
    pantry: &P,
) -> CostingResult<CostedLine> {
    let ingredient = pantry.ingredient(line.ingredient_id()).ok_or(
        CostingError::MissingIngredientReference {
            recipe_id,
            ingredient_id: line.ingredient_id(),
        },
    )?;
    ingredient.validate()?;
    let normalized = line.check_current(ingredient)?;
    let figures = line_figures(line.normalized_quantity(), ingredient);

    Ok(CostedLine {
        ingredient_id: ingredient.id,
        ingredient_name: ingredient.name.clone(),
        quantity: line.quantity(),
        unit: line.unit().to_string(),
        normalized_quantity: line.normalized_quantity(),
        basis: normalized.basis,
        priced: ingredient.is_priced(),
        figures,
    })
}

/// Cost every line of a recipe and compute its totals
///
/// Any unresolvable, stale or repeated line fails the whole recipe; partial
/// totals are never returned.
pub fn cost_recipe<P: Pantry + ?Sized>(recipe: &Recipe, pantry: &P) -> CostingResult<RecipeCosting> {
    let mut seen = HashSet::new();
    if let Some(line) = recipe.lines().iter().find(|l| !seen.insert(l.ingredient_id())) {
        return Err(CostingError::DuplicateLine {
            recipe_id: recipe.id,
            ingredient_id: line.ingredient_id(),
        });
    }

    let lines = recipe
        .lines()
        .iter()
        .map(|line| cost_line(recipe.id, line, pantry))
        .collect::<CostingResult<Vec<_>>>()?;

    let sum: LineFigures = lines.iter().map(|l| l.figures).sum();
    let totals = per_serving(sum, recipe.servings())?;

    tracing::debug!(
        recipe_id = recipe.id,
        lines = lines.len(),
        total_cost = totals.total_cost,
        total_energy_kj = totals.total_energy_kj,
        "Recipe costed"
    );

    Ok(RecipeCosting {
        recipe_id: recipe.id,
        title: recipe.title.clone(),
        servings: recipe.servings(),
        lines,
        totals,
    })
}

/// Totals only
pub fn recipe_totals<P: Pantry + ?Sized>(recipe: &Recipe, pantry: &P) -> CostingResult<RecipeTotals> {
    cost_recipe(recipe, pantry).map(|c| c.totals)
}
