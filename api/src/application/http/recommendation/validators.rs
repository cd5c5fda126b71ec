use nutripick_core::domain::recommendation::value_objects::Gender;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1, max = 50, message = "name must be between 1 and 50 characters"))]
    pub name: String,

    #[validate(range(min = 1, max = 100, message = "age must be between 1 and 100"))]
    pub age: u8,

    pub gender: Gender,

    #[serde(default)]
    pub declared_conditions: Vec<String>,

    #[serde(default)]
    pub selected_symptoms: Vec<String>,

    #[serde(default)]
    pub selected_purposes: Vec<String>,
}
