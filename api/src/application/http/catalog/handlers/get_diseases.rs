use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDiseasesResponse {
    pub items: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/diseases",
    tag = "catalog",
    summary = "List the disease taxonomy",
    description = "Fixed list of declarable medical conditions for the intake form",
    responses(
        (status = 200, body = GetDiseasesResponse)
    )
)]
pub async fn get_diseases(
    State(state): State<AppState>,
) -> Result<Response<GetDiseasesResponse>, ApiError> {
    Ok(Response::OK(GetDiseasesResponse {
        items: state.catalog.disease_options(),
    }))
}
