use axum::extract::State;
use nutripick_core::domain::catalog::entities::NutrientRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct NutrientResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub detail: String,
    pub purchase_link: String,
    pub symptoms: Vec<String>,
    pub purposes: Vec<String>,
    pub daily_dosage: String,
    pub directions: String,
    pub contraindications: Vec<String>,
}

impl From<&NutrientRecord> for NutrientResponse {
    fn from(record: &NutrientRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.display_name.to_string(),
            description: record.description.to_string(),
            detail: record.detail.to_string(),
            purchase_link: record.purchase_link.to_string(),
            symptoms: record.symptoms.iter().map(|s| s.to_string()).collect(),
            purposes: record.purposes.iter().map(|s| s.to_string()).collect(),
            daily_dosage: record.daily_dosage.to_string(),
            directions: record.directions.to_string(),
            contraindications: record
                .contraindications
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListNutrientsResponse {
    pub items: Vec<NutrientResponse>,
}

#[utoipa::path(
    get,
    path = "/nutrients",
    tag = "catalog",
    summary = "List catalog nutrients",
    description = "Full supplement catalog in definition order, for the purchase-guide view",
    responses(
        (status = 200, body = ListNutrientsResponse)
    )
)]
pub async fn list_nutrients(
    State(state): State<AppState>,
) -> Result<Response<ListNutrientsResponse>, ApiError> {
    let items = state.catalog.iter().map(NutrientResponse::from).collect();
    Ok(Response::OK(ListNutrientsResponse { items }))
}
