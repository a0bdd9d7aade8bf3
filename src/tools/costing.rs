//! Costing Tools
//!
//! Turn a costing document into per-recipe reports for the presentation
//! layer, and list the units a line may use.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::build_info::BuildInfo;
use crate::costing::{cost_recipe, Conversion, RecipeCosting, UnitRegistry};
use crate::models::Pantry;
use super::document::{CostDocument, RecipeDraft};

/// A known unit as shown in unit pickers
#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub name: &'static str,
    /// Base units per one of this unit; None when the ingredient's weight applies
    pub factor: Option<f64>,
    pub uses_ingredient_weight: bool,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub build: BuildInfo,
    pub units: Vec<UnitSummary>,
    pub count: usize,
}

/// Costing outcome for one recipe
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecipeOutcome {
    Costed(RecipeCosting),
    Failed {
        recipe_id: i64,
        title: String,
        error: String,
    },
}

impl RecipeOutcome {
    pub fn recipe_id(&self) -> i64 {
        match self {
            RecipeOutcome::Costed(costing) => costing.recipe_id,
            RecipeOutcome::Failed { recipe_id, .. } => *recipe_id,
        }
    }

    pub fn is_costed(&self) -> bool {
        matches!(self, RecipeOutcome::Costed(_))
    }
}

/// Response for cost_document
#[derive(Debug, Serialize)]
pub struct CostReport {
    pub build: BuildInfo,
    pub generated_at: DateTime<Utc>,
    pub ingredient_count: usize,
    pub recipes: Vec<RecipeOutcome>,
    pub costed: usize,
    pub failed: usize,
}

/// List the units a recipe line may use, in display order
pub fn list_units() -> ListUnitsResponse {
    let registry = UnitRegistry::standard();
    let units: Vec<UnitSummary> = registry
        .entries()
        .iter()
        .map(|entry| UnitSummary {
            name: entry.name,
            factor: registry.factor(entry.name),
            uses_ingredient_weight: entry.conversion == Conversion::IngredientWeight,
        })
        .collect();
    let count = units.len();

    ListUnitsResponse {
        build: BuildInfo::current(),
        units,
        count,
    }
}

/// Build and cost a single draft
///
/// Any failure is reported against the recipe instead of aborting the run.
pub fn cost_draft<P: Pantry + ?Sized>(draft: &RecipeDraft, pantry: &P) -> RecipeOutcome {
    let result = draft
        .build(pantry)
        .and_then(|recipe| cost_recipe(&recipe, pantry));

    match result {
        Ok(costing) => {
            let unpriced = costing.lines.iter().filter(|l| !l.priced).count();
            if unpriced > 0 {
                tracing::debug!(
                    recipe_id = draft.id,
                    "{} line(s) use unpriced ingredients",
                    unpriced
                );
            }
            RecipeOutcome::Costed(costing)
        }
        Err(e) => {
            tracing::warn!("Failed to cost recipe {} '{}': {}", draft.id, draft.title, e);
            RecipeOutcome::Failed {
                recipe_id: draft.id,
                title: draft.title.clone(),
                error: e.to_string(),
            }
        }
    }
}

/// Cost every recipe in the document, or only `recipe_id` when given
pub fn cost_document(document: &CostDocument, recipe_id: Option<i64>) -> CostReport {
    let pantry = document.pantry();
    let recipes: Vec<RecipeOutcome> = document
        .recipes
        .iter()
        .filter(|draft| recipe_id.map_or(true, |id| draft.id == id))
        .map(|draft| cost_draft(draft, &pantry))
        .collect();

    let costed = recipes.iter().filter(|r| r.is_costed()).count();
    let failed = recipes.len() - costed;

    tracing::info!(
        "Costed {} recipe(s), {} failed, from {} ingredient(s)",
        costed,
        failed,
        pantry.len()
    );

    CostReport {
        build: BuildInfo::current(),
        generated_at: Utc::now(),
        ingredient_count: pantry.len(),
        recipes,
        costed,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "ingredients": [
            {"id": 1, "name": "Flour", "price_per_kg_l": 4.0, "kj_per_100": 1500, "weight_per_unit": 0.06},
            {"id": 2, "name": "Egg", "price_per_kg_l": 4.0, "kj_per_100": 1500, "weight_per_unit": 0.06},
            {"id": 3, "name": "Water"}
        ],
        "recipes": [
            {"id": 1, "title": "Scones", "servings": 4, "lines": [
                {"ingredient_id": 1, "quantity": 2, "unit": "cups"},
                {"ingredient_id": 2, "quantity": 3, "unit": "unit"}
            ]},
            {"id": 2, "title": "Ghost", "servings": 2, "lines": [
                {"ingredient_id": 99, "quantity": 1, "unit": "grams"}
            ]},
            {"id": 3, "title": "Nobody", "servings": 0},
            {"id": 4, "title": "Soup", "servings": 2, "lines": [
                {"ingredient_id": 3, "quantity": 2, "unit": "kg/L"}
            ]}
        ]
    }"#;

    fn document() -> CostDocument {
        CostDocument::from_json(DOCUMENT).unwrap()
    }

    #[test]
    fn test_list_units() {
        let response = list_units();
        assert_eq!(response.count, 7);
        assert_eq!(response.units[0].name, "grams");
        assert_eq!(response.units[0].factor, Some(0.001));

        let discrete = response.units.iter().find(|u| u.name == "unit").unwrap();
        assert!(discrete.uses_ingredient_weight);
        assert_eq!(discrete.factor, None);
    }

    #[test]
    fn test_bad_recipes_do_not_hide_good_ones() {
        let report = cost_document(&document(), None);
        assert_eq!(report.recipes.len(), 4);
        assert_eq!(report.costed, 2);
        assert_eq!(report.failed, 2);
        assert_eq!(report.ingredient_count, 3);

        match &report.recipes[0] {
            RecipeOutcome::Costed(costing) => {
                assert!((costing.totals.total_cost - 2.72).abs() < 1e-9);
                assert!((costing.totals.cost_per_serving - 0.68).abs() < 1e-9);
                assert!((costing.totals.total_energy_kj - 10200.0).abs() < 1e-6);
                assert!((costing.totals.energy_per_serving_kj - 2550.0).abs() < 1e-6);
            }
            other => panic!("expected costed recipe, got {:?}", other),
        }

        match &report.recipes[1] {
            RecipeOutcome::Failed { recipe_id, error, .. } => {
                assert_eq!(*recipe_id, 2);
                assert!(error.contains("missing ingredient 99"));
            }
            other => panic!("expected failure, got {:?}", other),
        }

        assert!(!report.recipes[2].is_costed());
    }

    #[test]
    fn test_unpriced_recipe_costs_zero() {
        let report = cost_document(&document(), Some(4));
        assert_eq!(report.recipes.len(), 1);
        match &report.recipes[0] {
            RecipeOutcome::Costed(costing) => {
                assert_eq!(costing.totals.total_cost, 0.0);
                assert!(!costing.lines[0].priced);
            }
            other => panic!("expected costed recipe, got {:?}", other),
        }
    }

    #[test]
    fn test_filter_by_unknown_recipe_is_empty() {
        let report = cost_document(&document(), Some(404));
        assert!(report.recipes.is_empty());
        assert_eq!(report.costed, 0);
        assert_eq!(report.failed, 0);
    }

    #[test]
    fn test_report_serializes_with_status_tags() {
        let report = cost_document(&document(), Some(2));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["recipes"][0]["status"], "failed");
        assert_eq!(json["recipes"][0]["recipe_id"], 2);
        assert!(json["generated_at"].is_string());
        assert_eq!(json["build"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(json["build"]["build_number"].is_u64());

        let report = cost_document(&document(), Some(1));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["recipes"][0]["status"], "costed");
        assert_eq!(json["recipes"][0]["title"], "Scones");
    }
}
