use crate::domain::{
    catalog::entities::{Catalog, NutrientRecord},
    recommendation::value_objects::{Assessment, RecommendationOutcome, UserProfile, Warning},
};

fn intersects(selected: &[String], declared: &[&str]) -> bool {
    declared.iter().any(|d| selected.iter().any(|s| s == d))
}

/// Decide what to do with a single catalog record for this profile.
///
/// A record the user neither matched by symptom nor by purpose is irrelevant
/// and produces nothing. A matched record with at least one declared condition
/// among its contraindications is warned about instead of recommended.
/// Matching is exact, case-sensitive string equality.
pub fn assess(profile: &UserProfile, record: &NutrientRecord) -> Assessment {
    let matched_symptom = intersects(&profile.selected_symptoms, record.symptoms);
    let matched_purpose = intersects(&profile.selected_purposes, record.purposes);

    if !matched_symptom && !matched_purpose {
        return Assessment::Irrelevant;
    }

    // Catalog declaration order, not selection order.
    let risk_factors: Vec<String> = record
        .contraindications
        .iter()
        .filter(|c| profile.declared_conditions.iter().any(|d| d == *c))
        .map(|c| c.to_string())
        .collect();

    if risk_factors.is_empty() {
        Assessment::Recommended
    } else {
        Assessment::Warned { risk_factors }
    }
}

/// Partition the catalog into recommendations and warnings for one profile.
///
/// Pure and total: no input produces an error, and both output sequences
/// preserve catalog iteration order. A record appears in at most one of the
/// two sequences, at most once.
pub fn recommend(profile: &UserProfile, catalog: &Catalog) -> RecommendationOutcome {
    let mut outcome = RecommendationOutcome::default();

    for record in catalog.iter() {
        match assess(profile, record) {
            Assessment::Recommended => outcome.recommendations.push(record),
            Assessment::Warned { risk_factors } => outcome.warnings.push(Warning {
                id: record.id.to_string(),
                display_name: record.display_name.to_string(),
                risk_factors,
                risk_message: record.risk_message.to_string(),
            }),
            Assessment::Irrelevant => {}
        }
    }

    outcome
}
