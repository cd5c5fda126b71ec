use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSymptomsResponse {
    pub items: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/symptoms",
    tag = "catalog",
    summary = "List selectable symptoms",
    description = "Sorted union of all catalog symptoms, used to populate the intake form",
    responses(
        (status = 200, body = GetSymptomsResponse)
    )
)]
pub async fn get_symptoms(
    State(state): State<AppState>,
) -> Result<Response<GetSymptomsResponse>, ApiError> {
    Ok(Response::OK(GetSymptomsResponse {
        items: state.catalog.all_symptoms(),
    }))
}
