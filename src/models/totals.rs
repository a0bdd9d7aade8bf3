//! Derived cost and energy figures
//!
//! Never stored; always recomputed from lines and ingredient rates.

use serde::Serialize;

/// Cost and energy for one line, or a sum of lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LineFigures {
    pub line_cost: f64,
    pub line_energy_kj: f64,
}

impl LineFigures {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl std::ops::Add for LineFigures {
    type Output = LineFigures;

    fn add(self, other: LineFigures) -> LineFigures {
        LineFigures {
            line_cost: self.line_cost + other.line_cost,
            line_energy_kj: self.line_energy_kj + other.line_energy_kj,
        }
    }
}

impl std::iter::Sum for LineFigures {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(LineFigures::zero(), |acc, f| acc + f)
    }
}

/// Whole-recipe and per-serving figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RecipeTotals {
    pub total_cost: f64,
    pub total_energy_kj: f64,
    pub cost_per_serving: f64,
    pub energy_per_serving_kj: f64,
}
