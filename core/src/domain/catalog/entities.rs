use serde::Serialize;

/// One entry of the supplement catalog. All fields reference compiled-in
/// static data; records are never built at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutrientRecord {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub detail: &'static str,
    pub purchase_link: &'static str,
    pub symptoms: &'static [&'static str],
    pub purposes: &'static [&'static str],
    pub daily_dosage: &'static str,
    pub directions: &'static str,
    pub contraindications: &'static [&'static str],
    pub risk_message: &'static str,
    pub stat_keyword: &'static str,
}

/// Fixed disease taxonomy offered by the intake form. Matching against
/// contraindications is exact string equality.
pub const DISEASE_OPTIONS: &[&str] = &[
    "위장장애",
    "신장질환",
    "간 질환",
    "심혈관질환",
    "당뇨",
    "요로결석",
    "임산부",
    "흡연자",
    "빈혈",
    "없음",
];

const BUILTIN_RECORDS: &[NutrientRecord] = &[
    NutrientRecord {
        id: "비타민C",
        display_name: "고려은단 비타민C 1000",
        description: "활성산소 케어 & 면역 충전",
        detail: "강력한 항산화 작용으로 피로를 개선하고 면역력을 높여줍니다.",
        purchase_link: "https://search.shopping.naver.com/search/all?query=비타민C",
        symptoms: &["피로", "면역력 저하", "감기 기운", "잇몸 출혈"],
        purposes: &["활력 증진", "피부 미용", "항산화 케어"],
        daily_dosage: "1,000mg",
        directions: "산성이 강하므로 식사 중이나 식후에 섭취하세요.",
        contraindications: &["신장질환", "위장장애", "요로결석"],
        risk_message: "신장 결석 이력이 있거나 위장이 약한 경우 주의가 필요합니다.",
        stat_keyword: "비타민C",
    },
    NutrientRecord {
        id: "티아민",
        display_name: "임팩타민 (비타민B 컴플렉스)",
        description: "지친 일상에 에너지 부스팅",
        detail: "탄수화물을 에너지로 변환하여 만성 피로 회복을 돕습니다.",
        purchase_link: "https://search.shopping.naver.com/search/all?query=비타민B",
        symptoms: &["만성 피로", "무기력", "어깨 결림", "식욕 부진"],
        purposes: &["활력 증진", "체력 보강", "수험생/직장인 케어"],
        daily_dosage: "50~100mg",
        directions: "활력을 위해 아침 식후 섭취를 권장합니다.",
        contraindications: &["위장장애"],
        risk_message: "고함량 복용 시 속쓰림이 발생할 수 있습니다.",
        stat_keyword: "티아민",
    },
    NutrientRecord {
        id: "비타민A",
        display_name: "루테인 지아잔틴",
        description: "침침한 눈을 선명하게",
        detail: "황반 색소 밀도를 유지하여 눈 건강과 시력 보호에 도움을 줍니다.",
        purchase_link: "https://search.shopping.naver.com/search/all?query=루테인",
        symptoms: &["눈 건조", "침침함", "야맹증", "시력 저하"],
        purposes: &["눈 건강", "노화 방지"],
        daily_dosage: "20mg (루테인)",
        directions: "지용성이므로 식사 직후 섭취 시 흡수율이 높습니다.",
        contraindications: &["간 질환", "임산부", "흡연자"],
        risk_message: "장기 과다 섭취 및 흡연자의 고용량 섭취 시 주의가 필요합니다.",
        stat_keyword: "비타민A",
    },
    NutrientRecord {
        id: "칼슘",
        display_name: "종근당 칼슘 마그네슘 D",
        description: "뼈 건강과 편안한 숙면",
        detail: "뼈와 치아를 형성하고 신경 안정 작용을 합니다.",
        purchase_link: "https://search.shopping.naver.com/search/all?query=칼슘마그네슘",
        symptoms: &["관절 통증", "눈 밑 떨림", "불면증", "골다공증"],
        purposes: &["뼈 건강", "성장 발육", "심신 안정"],
        daily_dosage: "700~800mg",
        directions: "근육 이완을 위해 저녁 식후 섭취가 좋습니다.",
        contraindications: &["신장질환", "심혈관질환", "변비"],
        risk_message: "신장 기능 저하 시 고칼슘혈증 위험이 있습니다.",
        stat_keyword: "칼슘",
    },
    NutrientRecord {
        id: "철",
        display_name: "훼라민Q (철분제)",
        description: "빈혈 예방과 산소 공급",
        detail: "혈액 생성을 돕고 체내 산소 운반을 원활하게 합니다.",
        purchase_link: "https://search.shopping.naver.com/search/all?query=철분제",
        symptoms: &["빈혈", "어지러움", "창백함", "두통"],
        purposes: &["임산부 케어", "빈혈 예방"],
        daily_dosage: "10~14mg",
        directions: "공복에 비타민C(오렌지주스)와 함께 드세요.",
        contraindications: &["위장장애", "간 질환"],
        risk_message: "위 점막 자극 및 변비 발생 가능성이 있습니다.",
        stat_keyword: "철",
    },
    NutrientRecord {
        id: "마그네슘",
        display_name: "닥터스베스트 마그네슘",
        description: "근육 이완과 스트레스 완화",
        detail: "신경과 근육 기능을 유지하고 눈 떨림을 방지합니다.",
        purchase_link: "https://search.shopping.naver.com/search/all?query=마그네슘",
        symptoms: &["눈 밑 떨림", "근육 경련", "불면증", "스트레스"],
        purposes: &["심신 안정", "근육 이완", "수면 질 개선"],
        daily_dosage: "315mg",
        directions: "취침 1시간 전 섭취 시 숙면에 도움됩니다.",
        contraindications: &["신장질환", "서맥"],
        risk_message: "신장 배설 기능 저하 시 주의가 필요합니다.",
        stat_keyword: "마그네슘",
    },
];

/// Immutable recommendation universe. Built once and shared read-only;
/// iteration order is the definition order above.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    records: &'static [NutrientRecord],
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            records: BUILTIN_RECORDS,
        }
    }

    /// Records in definition order. Restartable on every call.
    pub fn iter(&self) -> impl Iterator<Item = &'static NutrientRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&'static NutrientRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Sorted, deduplicated union of all record symptoms.
    pub fn all_symptoms(&self) -> Vec<String> {
        Self::sorted_union(self.records.iter().map(|r| r.symptoms))
    }

    /// Sorted, deduplicated union of all record purposes.
    pub fn all_purposes(&self) -> Vec<String> {
        Self::sorted_union(self.records.iter().map(|r| r.purposes))
    }

    pub fn disease_options(&self) -> Vec<String> {
        DISEASE_OPTIONS.iter().map(|d| d.to_string()).collect()
    }

    fn sorted_union<'a>(sets: impl Iterator<Item = &'a [&'a str]>) -> Vec<String> {
        let mut union: Vec<String> = sets
            .flat_map(|set| set.iter().map(|s| s.to_string()))
            .collect();
        union.sort();
        union.dedup();
        union
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_six_records_in_definition_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec!["비타민C", "티아민", "비타민A", "칼슘", "철", "마그네슘"]
        );
    }

    #[test]
    fn iter_is_restartable() {
        let catalog = Catalog::builtin();
        let first: Vec<&str> = catalog.iter().map(|r| r.id).collect();
        let second: Vec<&str> = catalog.iter().map(|r| r.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn all_symptoms_is_sorted_and_deduplicated() {
        let symptoms = Catalog::builtin().all_symptoms();
        let mut sorted = symptoms.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(symptoms, sorted);
        // 눈 밑 떨림 appears on both 칼슘 and 마그네슘 but must be listed once.
        assert_eq!(symptoms.iter().filter(|s| *s == "눈 밑 떨림").count(), 1);
    }

    #[test]
    fn all_purposes_contains_shared_entries_once() {
        let purposes = Catalog::builtin().all_purposes();
        // 활력 증진 is declared by 비타민C and 티아민.
        assert_eq!(purposes.iter().filter(|p| *p == "활력 증진").count(), 1);
        // 심신 안정 is declared by 칼슘 and 마그네슘.
        assert_eq!(purposes.iter().filter(|p| *p == "심신 안정").count(), 1);
    }

    #[test]
    fn get_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("철").map(|r| r.display_name), Some("훼라민Q (철분제)"));
        assert!(catalog.get("아연").is_none());
    }
}
