use super::handlers::{
    get_diseases::{__path_get_diseases, get_diseases},
    get_purposes::{__path_get_purposes, get_purposes},
    get_symptoms::{__path_get_symptoms, get_symptoms},
    list_nutrients::{__path_list_nutrients, list_nutrients},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_nutrients, get_symptoms, get_purposes, get_diseases))]
pub struct CatalogApiDoc;

pub fn catalog_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/catalog/nutrients", state.args.server.root_path),
            get(list_nutrients),
        )
        .route(
            &format!("{}/catalog/symptoms", state.args.server.root_path),
            get(get_symptoms),
        )
        .route(
            &format!("{}/catalog/purposes", state.args.server.root_path),
            get(get_purposes),
        )
        .route(
            &format!("{}/catalog/diseases", state.args.server.root_path),
            get(get_diseases),
        )
}
