//! Pantry lookup
//!
//! The costing engine only reads ingredients; whatever store holds them
//! implements `Pantry`.

use std::collections::BTreeMap;

use super::{Ingredient, IngredientId};

/// Read access to ingredient records
pub trait Pantry {
    fn ingredient(&self, id: IngredientId) -> Option<&Ingredient>;
}

/// Ingredients held in memory, keyed by id
#[derive(Debug, Clone, Default)]
pub struct InMemoryPantry {
    items: BTreeMap<IngredientId, Ingredient>,
}

impl InMemoryPantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an ingredient, returning the previous record
    pub fn insert(&mut self, ingredient: Ingredient) -> Option<Ingredient> {
        self.items.insert(ingredient.id, ingredient)
    }

    pub fn remove(&mut self, id: IngredientId) -> Option<Ingredient> {
        self.items.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ingredients ordered by id
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.items.values()
    }
}

impl Pantry for InMemoryPantry {
    fn ingredient(&self, id: IngredientId) -> Option<&Ingredient> {
        self.items.get(&id)
    }
}

impl FromIterator<Ingredient> for InMemoryPantry {
    fn from_iter<I: IntoIterator<Item = Ingredient>>(iter: I) -> Self {
        let mut pantry = Self::new();
        for ingredient in iter {
            pantry.insert(ingredient);
        }
        pantry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replace_remove() {
        let mut pantry = InMemoryPantry::new();
        assert!(pantry.insert(Ingredient::new(1, "Rice")).is_none());
        let old = pantry.insert(Ingredient::new(1, "Brown rice")).unwrap();
        assert_eq!(old.name, "Rice");
        assert_eq!(pantry.ingredient(1).unwrap().name, "Brown rice");
        assert_eq!(pantry.len(), 1);

        assert!(pantry.remove(1).is_some());
        assert!(pantry.ingredient(1).is_none());
        assert!(pantry.is_empty());
    }
}
