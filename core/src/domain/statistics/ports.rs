use crate::domain::statistics::value_objects::{
    GenderComparisonEntry, IntakeOverview, MacroBalance,
};

/// Read-only view of the nutrition survey the presentation layer consumes.
/// Lookups never fail; an unavailable dataset answers with `None`/empty.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionStats: Send + Sync {
    fn is_available(&self) -> bool;

    fn average_intake(&self, gender: &str, keyword: &str) -> Option<f64>;

    fn overview(&self) -> Option<IntakeOverview>;

    fn macro_balance(&self) -> Option<MacroBalance>;

    fn gender_comparison(&self) -> Vec<GenderComparisonEntry>;
}
