use super::handlers::{
    get_gender_comparison::{__path_get_gender_comparison, get_gender_comparison},
    get_macro_balance::{__path_get_macro_balance, get_macro_balance},
    get_overview::{__path_get_overview, get_overview},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_overview, get_macro_balance, get_gender_comparison))]
pub struct StatsApiDoc;

pub fn stats_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/stats/overview", state.args.server.root_path),
            get(get_overview),
        )
        .route(
            &format!("{}/stats/macro-balance", state.args.server.root_path),
            get(get_macro_balance),
        )
        .route(
            &format!("{}/stats/gender-comparison", state.args.server.root_path),
            get(get_gender_comparison),
        )
}
