//! Costing engine
//!
//! Unit normalization plus line, recipe and per-serving arithmetic.

pub mod converter;
pub mod engine;
pub mod units;

pub use converter::{normalize, normalize_with, ConversionBasis, Normalized};
pub use engine::{
    cost_line, cost_recipe, line_cost, line_energy_kj, line_figures, per_serving, recipe_totals,
    CostedLine, RecipeCosting, PER_100G_TO_PER_KG,
};
pub use units::{Conversion, UnitEntry, UnitRegistry, DISCRETE_UNIT};
