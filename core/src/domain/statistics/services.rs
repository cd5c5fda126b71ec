use crate::domain::{recommendation::value_objects::Gender, statistics::ports::NutritionStats};

/// Label shown on a recommendation card when no survey row matches.
pub const INSUFFICIENT_DATA_LABEL: &str = "분석 데이터 부족";

/// Human-readable survey annotation for one recommended nutrient.
pub fn intake_label<S: NutritionStats + ?Sized>(
    stats: &S,
    gender: Gender,
    stat_keyword: &str,
) -> String {
    match stats.average_intake(gender.label(), stat_keyword) {
        Some(value) => format!("한국 {} 평균: {}", gender.label(), value),
        None => INSUFFICIENT_DATA_LABEL.to_string(),
    }
}
