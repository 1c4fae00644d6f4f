//! Total cost calculation for a silver purchase.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Grams,
    Kilograms,
}

impl Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightUnit::Grams => write!(f, "Grams"),
            WeightUnit::Kilograms => write!(f, "Kilograms"),
        }
    }
}

/// Result of a cost calculation, always denominated in INR.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostQuote {
    pub weight_grams: f64,
    pub cost_inr: f64,
}

/// Computes the total cost of `weight` of silver at `price_per_gram` INR.
///
/// Inputs pass through unchecked: zero or negative weight or price yields a
/// zero or negative cost rather than an error.
pub fn total_cost(weight: f64, unit: WeightUnit, price_per_gram: f64) -> CostQuote {
    let weight_grams = match unit {
        WeightUnit::Kilograms => weight * 1000.0,
        WeightUnit::Grams => weight,
    };
    CostQuote {
        weight_grams,
        cost_inr: weight_grams * price_per_gram,
    }
}
