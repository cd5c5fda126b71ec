use axum::extract::State;
use nutripick_core::domain::statistics::{ports::NutritionStats, value_objects::MacroBalance};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMacroBalanceResponse {
    /// `None` when the dataset is unavailable or lacks one of the three
    /// macronutrient subtotals.
    pub balance: Option<MacroBalance>,
}

#[utoipa::path(
    get,
    path = "/macro-balance",
    tag = "stats",
    summary = "Macronutrient balance",
    description = "Carbohydrate/protein/fat subtotal averages for the balance chart",
    responses(
        (status = 200, body = GetMacroBalanceResponse)
    )
)]
pub async fn get_macro_balance(
    State(state): State<AppState>,
) -> Result<Response<GetMacroBalanceResponse>, ApiError> {
    Ok(Response::OK(GetMacroBalanceResponse {
        balance: state.stats.macro_balance(),
    }))
}
