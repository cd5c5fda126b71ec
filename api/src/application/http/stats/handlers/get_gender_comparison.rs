use axum::extract::State;
use nutripick_core::domain::statistics::{
    ports::NutritionStats, value_objects::GenderComparisonEntry,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetGenderComparisonResponse {
    pub items: Vec<GenderComparisonEntry>,
}

#[utoipa::path(
    get,
    path = "/gender-comparison",
    tag = "stats",
    summary = "Male/female intake comparison",
    description = "Intake averages per gender over the fixed nutrient shortlist; \
                   nutrients missing either gender row are omitted",
    responses(
        (status = 200, body = GetGenderComparisonResponse)
    )
)]
pub async fn get_gender_comparison(
    State(state): State<AppState>,
) -> Result<Response<GetGenderComparisonResponse>, ApiError> {
    Ok(Response::OK(GetGenderComparisonResponse {
        items: state.stats.gender_comparison(),
    }))
}
