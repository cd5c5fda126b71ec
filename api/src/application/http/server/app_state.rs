use std::sync::Arc;

use nutripick_core::{
    domain::catalog::entities::Catalog, infrastructure::statistics::CsvStatsRepository,
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub catalog: Catalog,
    pub stats: Arc<CsvStatsRepository>,
}

impl AppState {
    pub fn new(args: Arc<Args>, catalog: Catalog, stats: CsvStatsRepository) -> Self {
        Self {
            args,
            catalog,
            stats: Arc::new(stats),
        }
    }
}
