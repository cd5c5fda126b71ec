use serde::{Deserialize, Serialize};

use crate::domain::statistics::value_objects::{
    GenderComparisonEntry, IntakeOverview, MacroBalance,
};

/// Subcategory label of the aggregate (non-subdivided) row for a
/// gender/nutrient pair.
pub const SUBTOTAL_LABEL: &str = "소계";

/// Gender label of the all-respondents slice, preferred for the dashboard
/// when the dataset carries it.
pub const OVERALL_LABEL: &str = "전체";

const MALE_LABEL: &str = "남자";
const FEMALE_LABEL: &str = "여자";

/// One row of the national nutrition survey table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRow {
    pub gender: String,
    pub nutrient: String,
    pub subcategory: String,
    /// Parsed permissively; a non-numeric cell is a missing value, not an
    /// error.
    pub average: Option<f64>,
}

/// Survey dataset in one of two explicit states. `Unavailable` covers a
/// missing file, a failed decode, and a failed parse; every lookup on it
/// reports insufficient data instead of erroring.
#[derive(Debug, Clone, PartialEq)]
pub enum StatDataset {
    Loaded(Vec<StatRow>),
    Unavailable,
}

impl StatDataset {
    pub fn is_available(&self) -> bool {
        matches!(self, StatDataset::Loaded(_))
    }

    /// Average of the subtotal row matching the gender exactly and containing
    /// the keyword in the nutrient name. First match wins, in dataset row
    /// order. `None` means insufficient data.
    pub fn average_intake(&self, gender: &str, keyword: &str) -> Option<f64> {
        let StatDataset::Loaded(rows) = self else {
            return None;
        };
        rows.iter()
            .find(|row| {
                row.gender == gender
                    && row.nutrient.contains(keyword)
                    && row.subcategory == SUBTOTAL_LABEL
            })
            .and_then(|row| row.average)
    }

    /// Gender slice the dashboard reports on: 전체 when the dataset has it,
    /// otherwise 남자.
    pub fn preferred_gender(&self) -> &'static str {
        match self {
            StatDataset::Loaded(rows) if rows.iter().any(|r| r.gender == OVERALL_LABEL) => {
                OVERALL_LABEL
            }
            _ => MALE_LABEL,
        }
    }

    pub fn overview(&self) -> Option<IntakeOverview> {
        if !self.is_available() {
            return None;
        }
        let gender = self.preferred_gender();
        Some(IntakeOverview {
            gender: gender.to_string(),
            avg_energy: self.average_intake(gender, "에너지"),
            avg_vitamin_c: self.average_intake(gender, "비타민C"),
        })
    }

    /// Carbohydrate/protein/fat subtotals for the preferred gender. All three
    /// must be present for the balance chart to make sense.
    pub fn macro_balance(&self) -> Option<MacroBalance> {
        let gender = self.preferred_gender();
        Some(MacroBalance {
            gender: gender.to_string(),
            carbohydrate: self.average_intake(gender, "탄수화물")?,
            protein: self.average_intake(gender, "단백질")?,
            fat: self.average_intake(gender, "지방")?,
        })
    }

    /// Male/female comparison over the fixed nutrient shortlist. Nutrients
    /// missing either gender row are skipped rather than reported as zero.
    pub fn gender_comparison(&self) -> Vec<GenderComparisonEntry> {
        const SHORTLIST: &[(&str, &str)] = &[
            ("칼슘", "칼슘"),
            ("철", "철"),
            ("나트륨", "나트륨"),
            ("비타민C", "비타민C"),
        ];

        SHORTLIST
            .iter()
            .filter_map(|(label, keyword)| {
                let male = self.average_intake(MALE_LABEL, keyword)?;
                let female = self.average_intake(FEMALE_LABEL, keyword)?;
                Some(GenderComparisonEntry {
                    label: label.to_string(),
                    male,
                    female,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(gender: &str, nutrient: &str, subcategory: &str, average: Option<f64>) -> StatRow {
        StatRow {
            gender: gender.to_string(),
            nutrient: nutrient.to_string(),
            subcategory: subcategory.to_string(),
            average,
        }
    }

    fn sample() -> StatDataset {
        StatDataset::Loaded(vec![
            row("남자", "비타민C(mg)", "소계", Some(68.3)),
            row("남자", "비타민C(mg)", "19-29세", Some(55.1)),
            row("여자", "비타민C(mg)", "소계", Some(60.9)),
            row("남자", "칼슘(mg)", "소계", Some(512.0)),
            row("여자", "칼슘(mg)", "소계", Some(428.5)),
            row("남자", "철(mg)", "소계", None),
            row("남자", "에너지(kcal)", "소계", Some(2105.0)),
        ])
    }

    #[test]
    fn lookup_matches_gender_exactly_and_nutrient_by_substring() {
        assert_eq!(sample().average_intake("남자", "비타민C"), Some(68.3));
        assert_eq!(sample().average_intake("여자", "비타민C"), Some(60.9));
    }

    #[test]
    fn lookup_only_considers_subtotal_rows() {
        // The 19-29세 row precedes nothing: the 소계 row is the only candidate.
        let dataset = StatDataset::Loaded(vec![
            row("남자", "나트륨(mg)", "19-29세", Some(4100.0)),
            row("남자", "나트륨(mg)", "소계", Some(3800.0)),
        ]);
        assert_eq!(dataset.average_intake("남자", "나트륨"), Some(3800.0));
    }

    #[test]
    fn first_matching_row_wins() {
        let dataset = StatDataset::Loaded(vec![
            row("남자", "비타민C(mg)", "소계", Some(10.0)),
            row("남자", "비타민C(mg)", "소계", Some(20.0)),
        ]);
        assert_eq!(dataset.average_intake("남자", "비타민C"), Some(10.0));
    }

    #[test]
    fn missing_average_cell_is_insufficient_data() {
        assert_eq!(sample().average_intake("남자", "철"), None);
    }

    #[test]
    fn no_matching_row_is_insufficient_data() {
        assert_eq!(sample().average_intake("남자", "마그네슘"), None);
        assert_eq!(sample().average_intake("전체", "비타민C"), None);
    }

    #[test]
    fn unavailable_dataset_answers_nothing() {
        let dataset = StatDataset::Unavailable;
        assert_eq!(dataset.average_intake("남자", "비타민C"), None);
        assert_eq!(dataset.overview(), None);
        assert_eq!(dataset.macro_balance(), None);
        assert!(dataset.gender_comparison().is_empty());
    }

    #[test]
    fn preferred_gender_falls_back_to_male() {
        assert_eq!(sample().preferred_gender(), "남자");

        let with_overall = StatDataset::Loaded(vec![row(
            "전체",
            "에너지(kcal)",
            "소계",
            Some(1950.0),
        )]);
        assert_eq!(with_overall.preferred_gender(), "전체");
    }

    #[test]
    fn overview_uses_preferred_gender() {
        let overview = sample().overview().unwrap();
        assert_eq!(overview.gender, "남자");
        assert_eq!(overview.avg_energy, Some(2105.0));
        assert_eq!(overview.avg_vitamin_c, Some(68.3));
    }

    #[test]
    fn macro_balance_requires_all_three_nutrients() {
        assert_eq!(sample().macro_balance(), None);

        let dataset = StatDataset::Loaded(vec![
            row("남자", "탄수화물(g)", "소계", Some(295.0)),
            row("남자", "단백질(g)", "소계", Some(75.2)),
            row("남자", "지방(g)", "소계", Some(48.6)),
        ]);
        let balance = dataset.macro_balance().unwrap();
        assert_eq!(balance.carbohydrate, 295.0);
        assert_eq!(balance.protein, 75.2);
        assert_eq!(balance.fat, 48.6);
    }

    #[test]
    fn gender_comparison_skips_nutrients_missing_either_row() {
        let entries = sample().gender_comparison();
        // Only 칼슘 has both 남자 and 여자 subtotal averages.
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "칼슘");
        assert_eq!(entries[0].male, 512.0);
        assert_eq!(entries[0].female, 428.5);
    }
}
