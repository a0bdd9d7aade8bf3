//! Ingredient model
//!
//! A pantry item with its price and energy rates.

use serde::{Deserialize, Serialize};

use crate::error::{CostingError, CostingResult};

pub type IngredientId = i64;

/// A pantry ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    /// Currency per kilogram or litre; 0 means unpriced
    #[serde(alias = "price_per_kg_l", default)]
    pub price_per_base_unit: f64,
    /// Kilojoules per 100 g
    #[serde(alias = "kj_per_100", default)]
    pub energy_per_100g: f64,
    /// Kilograms in one discrete "unit" (one egg, one carrot)
    #[serde(alias = "weight_per_unit", default)]
    pub weight_per_discrete_unit: Option<f64>,
}

impl Ingredient {
    pub fn new(id: IngredientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price_per_base_unit: 0.0,
            energy_per_100g: 0.0,
            weight_per_discrete_unit: None,
        }
    }

    pub fn with_price(mut self, price_per_base_unit: f64) -> Self {
        self.price_per_base_unit = price_per_base_unit;
        self
    }

    pub fn with_energy(mut self, energy_per_100g: f64) -> Self {
        self.energy_per_100g = energy_per_100g;
        self
    }

    pub fn with_discrete_weight(mut self, kg: f64) -> Self {
        self.weight_per_discrete_unit = Some(kg);
        self
    }

    /// Reject negative or non-finite rates
    ///
    /// A zero discrete weight is allowed; it means no weight was entered.
    pub fn validate(&self) -> CostingResult<()> {
        let rates = [
            ("price_per_base_unit", Some(self.price_per_base_unit)),
            ("energy_per_100g", Some(self.energy_per_100g)),
            ("weight_per_discrete_unit", self.weight_per_discrete_unit),
        ];

        for (field, value) in rates {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(CostingError::InvalidIngredient {
                        ingredient_id: self.id,
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Whether a price has been entered for this ingredient
    pub fn is_priced(&self) -> bool {
        self.price_per_base_unit != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_household_column_names() {
        let json = r#"{
            "id": 3,
            "name": "Carrot",
            "price_per_kg_l": 2.5,
            "kj_per_100": 170,
            "weight_per_unit": 0.1
        }"#;
        let ing: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ing.price_per_base_unit, 2.5);
        assert_eq!(ing.energy_per_100g, 170.0);
        assert_eq!(ing.weight_per_discrete_unit, Some(0.1));
    }

    #[test]
    fn test_missing_rates_default_to_zero() {
        let ing: Ingredient = serde_json::from_str(r#"{"id": 1, "name": "Salt"}"#).unwrap();
        assert_eq!(ing.price_per_base_unit, 0.0);
        assert_eq!(ing.energy_per_100g, 0.0);
        assert_eq!(ing.weight_per_discrete_unit, None);
        assert!(!ing.is_priced());
        assert!(ing.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_rates() {
        let egg = Ingredient::new(4, "Egg").with_price(9.0).with_energy(600.0);
        assert!(egg.clone().with_discrete_weight(0.0).validate().is_ok());

        assert_eq!(
            egg.clone().with_energy(-1.0).validate().unwrap_err(),
            CostingError::InvalidIngredient { ingredient_id: 4, field: "energy_per_100g", value: -1.0 }
        );
        assert!(matches!(
            egg.clone().with_discrete_weight(-0.05).validate().unwrap_err(),
            CostingError::InvalidIngredient { field: "weight_per_discrete_unit", .. }
        ));
        assert!(egg.with_price(f64::INFINITY).validate().is_err());
    }
}
