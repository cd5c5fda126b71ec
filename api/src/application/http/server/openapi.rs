use crate::application::http::{
    catalog::router::CatalogApiDoc, recommendation::router::RecommendationApiDoc,
    stats::router::StatsApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriPick API"
    ),
    nest(
        (path = "/catalog", api = CatalogApiDoc),
        (path = "/recommendations", api = RecommendationApiDoc),
        (path = "/stats", api = StatsApiDoc),
    )
)]
pub struct ApiDoc;
