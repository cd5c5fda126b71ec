use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    recommendation::validators::RecommendRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use nutripick_core::domain::{
    recommendation::{
        services,
        value_objects::{UserProfile, Warning},
    },
    statistics::services::intake_label,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WarningCard {
    pub id: String,
    pub name: String,
    pub risk_factors: Vec<String>,
    pub risk_message: String,
}

impl From<Warning> for WarningCard {
    fn from(warning: Warning) -> Self {
        Self {
            id: warning.id,
            name: warning.display_name,
            risk_factors: warning.risk_factors,
            risk_message: warning.risk_message,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendationCard {
    pub id: String,
    pub name: String,
    pub detail: String,
    pub daily_dosage: String,
    pub directions: String,
    pub purchase_link: String,
    /// Survey annotation: the national average intake for the requester's
    /// gender, or an insufficient-data label.
    pub stat_label: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendResponse {
    pub name: String,
    pub warnings: Vec<WarningCard>,
    pub recommendations: Vec<RecommendationCard>,
    /// Set when neither a recommendation nor a warning matched.
    pub notice: Option<String>,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recommendation",
    summary = "Issue a recommendation",
    description = "Partition the catalog into recommendation and warning cards for one profile",
    request_body = RecommendRequest,
    responses(
        (status = 200, body = RecommendResponse),
        (status = 400, description = "Validation failed or no symptom/goal selected")
    )
)]
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Response<RecommendResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    // Boundary precondition: the engine itself never rejects input.
    if request.selected_symptoms.is_empty() && request.selected_purposes.is_empty() {
        return Err(ApiError::BadRequest(
            "증상 또는 목표를 하나 이상 선택해 주세요.".to_string(),
        ));
    }

    let profile = UserProfile {
        name: request.name,
        age: request.age,
        gender: request.gender,
        selected_symptoms: request.selected_symptoms,
        selected_purposes: request.selected_purposes,
        declared_conditions: request.declared_conditions,
    };

    let outcome = services::recommend(&profile, &state.catalog);

    let recommendations: Vec<RecommendationCard> = outcome
        .recommendations
        .iter()
        .map(|record| RecommendationCard {
            id: record.id.to_string(),
            name: record.display_name.to_string(),
            detail: record.detail.to_string(),
            daily_dosage: record.daily_dosage.to_string(),
            directions: record.directions.to_string(),
            purchase_link: record.purchase_link.to_string(),
            stat_label: intake_label(state.stats.as_ref(), profile.gender, record.stat_keyword),
        })
        .collect();

    let warnings: Vec<WarningCard> = outcome.warnings.into_iter().map(WarningCard::from).collect();

    let notice = if recommendations.is_empty() && warnings.is_empty() {
        Some("선택하신 조건에 맞는 추천 영양제가 없습니다.".to_string())
    } else {
        None
    };

    Ok(Response::OK(RecommendResponse {
        name: profile.name,
        warnings,
        recommendations,
        notice,
    }))
}
