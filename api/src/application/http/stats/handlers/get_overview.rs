use axum::extract::State;
use nutripick_core::domain::statistics::{ports::NutritionStats, value_objects::IntakeOverview};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetOverviewResponse {
    pub available: bool,
    pub overview: Option<IntakeOverview>,
}

#[utoipa::path(
    get,
    path = "/overview",
    tag = "stats",
    summary = "Survey dashboard headline numbers",
    description = "Average energy and vitamin C intake for the preferred gender slice; \
                   `available: false` when the survey dataset could not be loaded",
    responses(
        (status = 200, body = GetOverviewResponse)
    )
)]
pub async fn get_overview(
    State(state): State<AppState>,
) -> Result<Response<GetOverviewResponse>, ApiError> {
    Ok(Response::OK(GetOverviewResponse {
        available: state.stats.is_available(),
        overview: state.stats.overview(),
    }))
}
