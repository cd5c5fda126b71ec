use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Headline numbers of the survey dashboard: average daily energy and
/// vitamin C intake for the preferred gender slice.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct IntakeOverview {
    pub gender: String,
    pub avg_energy: Option<f64>,
    pub avg_vitamin_c: Option<f64>,
}

/// Macronutrient subtotal averages feeding the balance chart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MacroBalance {
    pub gender: String,
    pub carbohydrate: f64,
    pub protein: f64,
    pub fat: f64,
}

/// Male/female intake averages for one nutrient.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenderComparisonEntry {
    pub label: String,
    pub male: f64,
    pub female: f64,
}
