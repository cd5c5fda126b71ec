use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPurposesResponse {
    pub items: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/purposes",
    tag = "catalog",
    summary = "List selectable health goals",
    description = "Sorted union of all catalog purposes, used to populate the intake form",
    responses(
        (status = 200, body = GetPurposesResponse)
    )
)]
pub async fn get_purposes(
    State(state): State<AppState>,
) -> Result<Response<GetPurposesResponse>, ApiError> {
    Ok(Response::OK(GetPurposesResponse {
        items: state.catalog.all_purposes(),
    }))
}
