use std::{fs, path::Path};

use encoding_rs::EUC_KR;

use crate::domain::{
    common::entities::app_errors::CoreError,
    statistics::{
        entities::{StatDataset, StatRow},
        ports::NutritionStats,
        value_objects::{GenderComparisonEntry, IntakeOverview, MacroBalance},
    },
};

const AVERAGE_COLUMN: &str = "평균";

/// File-backed survey adapter. Loaded once at startup; a failed load degrades
/// to `StatDataset::Unavailable` instead of aborting.
pub struct CsvStatsRepository {
    dataset: StatDataset,
}

impl CsvStatsRepository {
    pub fn load(path: &Path) -> Self {
        match read_dataset(path) {
            Ok(dataset) => Self { dataset },
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "survey dataset unavailable, statistics lookups will report insufficient data"
                );
                Self {
                    dataset: StatDataset::Unavailable,
                }
            }
        }
    }

    pub fn from_dataset(dataset: StatDataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &StatDataset {
        &self.dataset
    }
}

impl NutritionStats for CsvStatsRepository {
    fn is_available(&self) -> bool {
        self.dataset.is_available()
    }

    fn average_intake(&self, gender: &str, keyword: &str) -> Option<f64> {
        self.dataset.average_intake(gender, keyword)
    }

    fn overview(&self) -> Option<IntakeOverview> {
        self.dataset.overview()
    }

    fn macro_balance(&self) -> Option<MacroBalance> {
        self.dataset.macro_balance()
    }

    fn gender_comparison(&self) -> Vec<GenderComparisonEntry> {
        self.dataset.gender_comparison()
    }
}

/// Read and parse the survey file. The file carries a one-line preamble above
/// the header row and is CP949-encoded in its published form, though UTF-8
/// re-exports exist. UTF-8 is attempted first because its validation is
/// strict; the EUC-KR fallback would accept most UTF-8 byte streams as
/// mojibake without reporting an error.
pub fn read_dataset(path: &Path) -> Result<StatDataset, CoreError> {
    let bytes = fs::read(path).map_err(|e| CoreError::DatasetRead(e.to_string()))?;
    let text = decode(&bytes)?;
    parse(&text)
}

fn decode(bytes: &[u8]) -> Result<String, CoreError> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }
    let (text, _, had_errors) = EUC_KR.decode(bytes);
    if had_errors {
        return Err(CoreError::DatasetDecode);
    }
    Ok(text.into_owned())
}

fn parse(text: &str) -> Result<StatDataset, CoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    // One-line preamble above the header row.
    if records
        .next()
        .transpose()
        .map_err(|e| CoreError::DatasetParse(e.to_string()))?
        .is_none()
    {
        return Ok(StatDataset::Loaded(Vec::new()));
    }

    let header = match records.next() {
        Some(header) => header.map_err(|e| CoreError::DatasetParse(e.to_string()))?,
        None => return Ok(StatDataset::Loaded(Vec::new())),
    };
    let average_idx = header.iter().position(|cell| clean(cell) == AVERAGE_COLUMN);

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|e| CoreError::DatasetParse(e.to_string()))?;
        if record.len() < 3 {
            continue;
        }
        let average = average_idx
            .and_then(|idx| record.get(idx))
            .and_then(|cell| cell.trim().parse::<f64>().ok());
        rows.push(StatRow {
            gender: clean(record.get(0).unwrap_or_default()),
            nutrient: clean(record.get(1).unwrap_or_default()),
            subcategory: clean(record.get(2).unwrap_or_default()),
            average,
        });
    }

    Ok(StatDataset::Loaded(rows))
}

fn clean(cell: &str) -> String {
    cell.replace('"', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
2023 국민건강영양조사,,,\n\
성별,영양소,구분,평균\n\
남자,비타민C(mg),소계,68.3\n\
남자,비타민C(mg),19-29세,55.1\n\
여자,비타민C(mg),소계,60.9\n\
남자,철(mg),소계,-\n";

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_euc_kr_encoded_file() {
        let (encoded, _, _) = EUC_KR.encode(SAMPLE);
        let file = write_temp(&encoded);

        let repo = CsvStatsRepository::load(file.path());
        assert!(repo.is_available());
        assert_eq!(repo.average_intake("남자", "비타민C"), Some(68.3));
    }

    #[test]
    fn falls_back_to_utf8() {
        let file = write_temp(SAMPLE.as_bytes());

        let repo = CsvStatsRepository::load(file.path());
        assert!(repo.is_available());
        assert_eq!(repo.average_intake("여자", "비타민C"), Some(60.9));
    }

    #[test]
    fn missing_file_degrades_to_unavailable() {
        let repo = CsvStatsRepository::load(Path::new("no/such/supplements.csv"));
        assert!(!repo.is_available());
        assert_eq!(repo.average_intake("남자", "비타민C"), None);
    }

    #[test]
    fn undecodable_bytes_degrade_to_unavailable() {
        // 0xFF is a valid lead byte in neither EUC-KR nor UTF-8.
        let file = write_temp(&[0xFF, 0xFF, 0xFF, 0xFF]);

        let repo = CsvStatsRepository::load(file.path());
        assert!(!repo.is_available());
    }

    #[test]
    fn preamble_line_is_skipped() {
        let dataset = parse(SAMPLE).unwrap();
        let StatDataset::Loaded(rows) = &dataset else {
            panic!("expected loaded dataset");
        };
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].gender, "남자");
        assert_eq!(rows[0].subcategory, "소계");
    }

    #[test]
    fn non_numeric_average_becomes_missing_value() {
        let dataset = parse(SAMPLE).unwrap();
        assert_eq!(dataset.average_intake("남자", "철"), None);
    }

    #[test]
    fn quoted_headers_and_cells_are_cleaned() {
        let text = "\
preamble,,,\n\
\"성별\",\"영양소\",\"구분\",\"평균\"\n\
 남자 ,에너지(kcal),소계,2105\n";
        let dataset = parse(text).unwrap();
        assert_eq!(dataset.average_intake("남자", "에너지"), Some(2105.0));
    }

    #[test]
    fn short_rows_are_ignored() {
        let text = "preamble\n성별,영양소,구분,평균\n남자\n남자,칼슘(mg),소계,512\n";
        let dataset = parse(text).unwrap();
        let StatDataset::Loaded(rows) = &dataset else {
            panic!("expected loaded dataset");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(dataset.average_intake("남자", "칼슘"), Some(512.0));
    }

    #[test]
    fn header_only_file_loads_empty() {
        let dataset = parse("preamble,,,\n성별,영양소,구분,평균\n").unwrap();
        assert_eq!(dataset, StatDataset::Loaded(Vec::new()));
        assert_eq!(dataset.average_intake("남자", "비타민C"), None);
    }
}
