//! Larder Tools module
//!
//! Document loading and costing reports for the presentation layer.

pub mod costing;
pub mod document;
