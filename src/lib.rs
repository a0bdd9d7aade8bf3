//! Larder Library
//!
//! Unit normalization and cost/energy aggregation for household recipes.

pub mod build_info;
pub mod costing;
pub mod error;
pub mod models;
pub mod tools;
