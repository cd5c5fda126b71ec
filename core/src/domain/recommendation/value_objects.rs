use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::catalog::entities::NutrientRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    #[serde(rename = "남자")]
    Male,
    #[serde(rename = "여자")]
    Female,
}

impl Gender {
    /// Label used by the intake form and by the statistics dataset.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "남자",
            Gender::Female => "여자",
        }
    }
}

/// One recommendation request. Discarded after the response is produced.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub selected_symptoms: Vec<String>,
    pub selected_purposes: Vec<String>,
    pub declared_conditions: Vec<String>,
}

/// A catalog entry the user matched but must not take. A contraindication
/// suppresses the recommendation entirely, it does not annotate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Warning {
    pub id: String,
    pub display_name: String,
    /// Matched conditions, in the order the catalog declares them.
    pub risk_factors: Vec<String>,
    pub risk_message: String,
}

/// Per-record decision of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assessment {
    Recommended,
    Warned { risk_factors: Vec<String> },
    Irrelevant,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendationOutcome {
    pub recommendations: Vec<&'static NutrientRecord>,
    pub warnings: Vec<Warning>,
}

impl RecommendationOutcome {
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty() && self.warnings.is_empty()
    }
}
