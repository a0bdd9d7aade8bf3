//! Data models
//!
//! Ingredients, recipes and their lines, plus the derived figures.

mod ingredient;
mod pantry;
mod recipe;
mod recipe_line;
mod totals;

pub use ingredient::{Ingredient, IngredientId};
pub use pantry::{InMemoryPantry, Pantry};
pub use recipe::Recipe;
pub(crate) use recipe::validate_servings;
pub use recipe_line::{LineInput, RecipeLine};
pub use totals::{LineFigures, RecipeTotals};
