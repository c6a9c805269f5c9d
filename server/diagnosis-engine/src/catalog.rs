//! Fixed question catalog: categories, weighted questions, option sets, and the
//! remediation solution catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::EngineError;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  KeyPerson,
  Corporate,
  Awareness,
  Scenario,
}

impl Category {
  pub const ALL: [Category; 4] = [
    Category::KeyPerson,
    Category::Corporate,
    Category::Awareness,
    Category::Scenario,
  ];

  /// Stable JSON id.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::KeyPerson => "key_person",
      Self::Corporate => "corporate",
      Self::Awareness => "awareness",
      Self::Scenario => "scenario",
    }
  }

  /// Display name used in reports and the consulting script.
  pub fn name(self) -> &'static str {
    match self {
      Self::KeyPerson => "대표자 리스크",
      Self::Corporate => "법인 경영 리스크",
      Self::Awareness => "리스크 인식",
      Self::Scenario => "시나리오",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// One selectable answer and its risk contribution (0.0 = no risk, 1.0 = maximal).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuestionOption {
  pub label: &'static str,
  pub score: f64,
}

/// The shared yes / partially / no option set of binary risk questions.
pub static BINARY_OPTIONS: [QuestionOption; 3] = [
  QuestionOption { label: "예", score: 1.0 },
  QuestionOption { label: "일부 해당", score: 0.5 },
  QuestionOption { label: "아니오", score: 0.0 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuestionKind {
  /// Options are always [`BINARY_OPTIONS`].
  BinaryRisk,
  /// Bespoke awareness / scenario option set.
  Custom(&'static [QuestionOption]),
}

impl QuestionKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::BinaryRisk => "binary_risk",
      Self::Custom(_) => "custom",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Question {
  pub prompt: &'static str,
  pub weight: u8,
  pub kind: QuestionKind,
}

impl Question {
  pub const fn binary(prompt: &'static str, weight: u8) -> Self {
    Self {
      prompt,
      weight,
      kind: QuestionKind::BinaryRisk,
    }
  }

  pub const fn custom(prompt: &'static str, options: &'static [QuestionOption], weight: u8) -> Self {
    Self {
      prompt,
      weight,
      kind: QuestionKind::Custom(options),
    }
  }

  /// Ordered option set, as presented to the respondent.
  pub fn options(&self) -> &'static [QuestionOption] {
    match self.kind {
      QuestionKind::BinaryRisk => &BINARY_OPTIONS,
      QuestionKind::Custom(options) => options,
    }
  }

  /// Look up the option matching a selected answer label.
  pub fn resolve(&self, answer: &str) -> Option<&'static QuestionOption> {
    self.options().iter().find(|o| o.label == answer)
  }

  pub fn max_risk_option(&self) -> Option<&'static QuestionOption> {
    self
      .options()
      .iter()
      .reduce(|best, o| if o.score > best.score { o } else { best })
  }

  pub fn min_risk_option(&self) -> Option<&'static QuestionOption> {
    self
      .options()
      .iter()
      .reduce(|best, o| if o.score < best.score { o } else { best })
  }
}

/// A category and its ordered questions.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDef {
  pub category: Category,
  pub questions: Vec<Question>,
}

impl CategoryDef {
  pub fn total_weight(&self) -> u32 {
    self.questions.iter().map(|q| u32::from(q.weight)).sum()
  }
}

// ---------------------------------------------------------------------------
// Solutions
// ---------------------------------------------------------------------------

/// Which risk presence makes a solution eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
  /// Any key-person item scored above zero.
  #[serde(rename = "keyman")]
  KeyPerson,
  /// Any corporate item scored above zero.
  #[serde(rename = "corp")]
  Corporate,
  /// Any item anywhere scored above zero.
  #[serde(rename = "all")]
  Any,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
  pub name: &'static str,
  pub icon: &'static str,
  pub color: &'static str,
  pub description: &'static str,
  pub trigger: Trigger,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
  categories: Vec<CategoryDef>,
  solutions: Vec<Solution>,
}

impl Catalog {
  /// Build a catalog from explicit data, rejecting malformed entries.
  pub fn new(categories: Vec<CategoryDef>, solutions: Vec<Solution>) -> Result<Self, EngineError> {
    let catalog = Self {
      categories,
      solutions,
    };
    catalog.validate()?;
    Ok(catalog)
  }

  /// The fixed four-category diagnostic questionnaire.
  pub fn standard() -> Self {
    Self {
      categories: vec![
        CategoryDef {
          category: Category::KeyPerson,
          questions: KEY_PERSON_QUESTIONS.to_vec(),
        },
        CategoryDef {
          category: Category::Corporate,
          questions: CORPORATE_QUESTIONS.to_vec(),
        },
        CategoryDef {
          category: Category::Awareness,
          questions: AWARENESS_QUESTIONS.to_vec(),
        },
        CategoryDef {
          category: Category::Scenario,
          questions: SCENARIO_QUESTIONS.to_vec(),
        },
      ],
      solutions: SOLUTIONS.to_vec(),
    }
  }

  pub fn categories(&self) -> &[CategoryDef] {
    &self.categories
  }

  pub fn category(&self, category: Category) -> Option<&CategoryDef> {
    self.categories.iter().find(|def| def.category == category)
  }

  pub fn solutions(&self) -> &[Solution] {
    &self.solutions
  }

  pub fn question_count(&self) -> usize {
    self.categories.iter().map(|def| def.questions.len()).sum()
  }

  pub fn total_weight(&self) -> u32 {
    self.categories.iter().map(CategoryDef::total_weight).sum()
  }

  /// Check catalog invariants: unique categories, weights in 1..=5, unique
  /// option labels, scores in [0, 1], and both a 0.0 and a 1.0 option per question.
  pub fn validate(&self) -> Result<(), EngineError> {
    let mut seen = HashSet::new();
    for def in &self.categories {
      if !seen.insert(def.category) {
        return Err(EngineError::invalid_catalog(format!(
          "duplicate category {}",
          def.category
        )));
      }
      for (index, question) in def.questions.iter().enumerate() {
        let at = format!("{}[{}]", def.category, index);
        if !(1..=5).contains(&question.weight) {
          return Err(EngineError::invalid_catalog(format!(
            "{}: weight {} outside 1..=5",
            at, question.weight
          )));
        }
        let options = question.options();
        let mut labels = HashSet::new();
        for option in options {
          if !labels.insert(option.label) {
            return Err(EngineError::invalid_catalog(format!(
              "{}: duplicate option {:?}",
              at, option.label
            )));
          }
          if !(0.0..=1.0).contains(&option.score) {
            return Err(EngineError::invalid_catalog(format!(
              "{}: option {:?} scores {} outside [0, 1]",
              at, option.label, option.score
            )));
          }
        }
        if !options.iter().any(|o| o.score == 1.0) {
          return Err(EngineError::invalid_catalog(format!(
            "{}: no maximal-risk option",
            at
          )));
        }
        if !options.iter().any(|o| o.score == 0.0) {
          return Err(EngineError::invalid_catalog(format!(
            "{}: no risk-free option",
            at
          )));
        }
      }
    }
    Ok(())
  }
}

impl Default for Catalog {
  fn default() -> Self {
    Self::standard()
  }
}

// ---------------------------------------------------------------------------
// Standard catalog data
// ---------------------------------------------------------------------------

static KEY_PERSON_QUESTIONS: [Question; 6] = [
  Question::binary("대표자 유고 시 의사결정 공백이 발생할 수 있다", 4),
  Question::binary("회사 주요 거래·의사결정이 대표자 개인에게 집중되어 있다", 5),
  Question::binary("대표자가 개인 보증을 서고 있다", 4),
  Question::binary("대표자 개인 재무와 법인 재무가 명확히 분리되어 있지 않다", 3),
  Question::binary("가업 승계 또는 지분 이전 계획이 명확하지 않다", 5),
  Question::binary("대표자 건강·사고 리스크에 대한 대비가 충분하지 않다", 5),
];

static CORPORATE_QUESTIONS: [Question; 6] = [
  Question::binary("매출이 특정 거래처에 과도하게 집중되어 있다", 4),
  Question::binary("핵심 인력 이탈 시 업무 공백이 크다", 4),
  Question::binary("설비·투자 회수 구조가 장기적이거나 불확실하다", 3),
  Question::binary("현금흐름 변동성이 크다", 4),
  Question::binary("외부 환경 변화(환율·정책·시장)에 취약하다", 3),
  Question::binary("예상치 못한 사고 발생 시 즉각 대응 체계가 부족하다", 5),
];

// Inverted scale: agreeing is the risk-free answer.
static AGREEMENT_OPTIONS: [QuestionOption; 3] = [
  QuestionOption { label: "그렇다", score: 0.0 },
  QuestionOption { label: "보통", score: 0.5 },
  QuestionOption { label: "아니다", score: 1.0 },
];

static PREPARED_OPTIONS: [QuestionOption; 2] = [
  QuestionOption { label: "예", score: 0.0 },
  QuestionOption { label: "아니오", score: 1.0 },
];

static AWARENESS_QUESTIONS: [Question; 3] = [
  Question::custom("대표자 리스크가 곧바로 법인 리스크로 이어질 수 있다", &AGREEMENT_OPTIONS, 3),
  Question::custom("단일 사고 발생 시 회사가 버틸 수 있는 기간을 알고 있다", &PREPARED_OPTIONS, 4),
  Question::custom("리스크 발생 시 대응 순서와 책임자가 정리되어 있다", &PREPARED_OPTIONS, 4),
];

static CEO_ABSENCE_OPTIONS: [QuestionOption; 3] = [
  QuestionOption { label: "큰 영향 없음", score: 0.0 },
  QuestionOption { label: "부분적 영향", score: 0.5 },
  QuestionOption { label: "경영 전반에 중대한 영향", score: 1.0 },
];

static STAFF_LOSS_OPTIONS: [QuestionOption; 3] = [
  QuestionOption { label: "대응 가능", score: 0.0 },
  QuestionOption { label: "일부 차질", score: 0.5 },
  QuestionOption { label: "심각한 차질", score: 1.0 },
];

static EXTERNAL_SHOCK_OPTIONS: [QuestionOption; 3] = [
  QuestionOption { label: "내부 대응 가능", score: 0.0 },
  QuestionOption { label: "단기 대응 필요", score: 0.5 },
  QuestionOption { label: "구조적 대응 필요", score: 1.0 },
];

static SCENARIO_QUESTIONS: [Question; 3] = [
  Question::custom("대표자가 6개월 이상 경영에서 이탈할 경우", &CEO_ABSENCE_OPTIONS, 5),
  Question::custom("핵심 인력 1~2명이 동시에 이탈할 경우", &STAFF_LOSS_OPTIONS, 4),
  Question::custom("대규모 투자 또는 외부 충격 발생 시", &EXTERNAL_SHOCK_OPTIONS, 4),
];

static SOLUTIONS: [Solution; 6] = [
  Solution {
    name: "대표자 리스크 관리",
    icon: "👔",
    color: "#9333ea",
    description: "CEO Plan · Key-Man 보험 등을 통해 대표자 유고·부적격 시 경영 연속성을 보장합니다.",
    trigger: Trigger::KeyPerson,
  },
  Solution {
    name: "종업원 단체보험",
    icon: "👨‍👩‍👧‍👦",
    color: "#ea580c",
    description: "핵심 인력 이탈·재해 시 기업 운영 안정을 위한 단체보험 설계.",
    trigger: Trigger::Corporate,
  },
  Solution {
    name: "가업승계 컨설팅",
    icon: "🏢",
    color: "#ca8a04",
    description: "지분 이전·상속·증여를 체계적으로 구조화하여 세금 부담을 최소화합니다.",
    trigger: Trigger::KeyPerson,
  },
  Solution {
    name: "법인 절세 컨설팅",
    icon: "📋",
    color: "#16a34a",
    description: "법인·개인 재무 분리와 절세 구조를 정리하여 불필요한 세금 부담을 줄입니다.",
    trigger: Trigger::KeyPerson,
  },
  Solution {
    name: "현금흐름 & 위기대응",
    icon: "📊",
    color: "#0891b2",
    description: "현금흐름 변동성 대비와 단일 사고 대응 구조를 체계적으로 설계합니다.",
    trigger: Trigger::Corporate,
  },
  Solution {
    name: "종합 재무컨설팅",
    icon: "📈",
    color: "#2563eb",
    description: "전체 리스크를 종합적으로 평가하여 최적의 구조 설계와 실행 계획을 제안합니다.",
    trigger: Trigger::Any,
  },
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn standard_catalog_is_valid() {
    assert!(Catalog::standard().validate().is_ok());
  }

  #[test]
  fn standard_category_weights() {
    let catalog = Catalog::standard();
    let weights: Vec<u32> = catalog.categories().iter().map(|d| d.total_weight()).collect();
    assert_eq!(weights, vec![26, 23, 11, 13]);
    assert_eq!(catalog.total_weight(), 73);
    assert_eq!(catalog.question_count(), 18);
  }

  #[test]
  fn categories_in_fixed_order() {
    let catalog = Catalog::standard();
    let order: Vec<Category> = catalog.categories().iter().map(|d| d.category).collect();
    assert_eq!(order, Category::ALL.to_vec());
  }

  #[test]
  fn binary_question_resolves_fixed_options() {
    let q = Question::binary("q", 3);
    assert_eq!(q.resolve("예").map(|o| o.score), Some(1.0));
    assert_eq!(q.resolve("일부 해당").map(|o| o.score), Some(0.5));
    assert_eq!(q.resolve("아니오").map(|o| o.score), Some(0.0));
    assert!(q.resolve("모름").is_none());
  }

  #[test]
  fn awareness_agreement_scores_inverted() {
    let catalog = Catalog::standard();
    let q = catalog.category(Category::Awareness).unwrap().questions[0];
    assert_eq!(q.min_risk_option().unwrap().label, "그렇다");
    assert_eq!(q.max_risk_option().unwrap().label, "아니다");
  }

  #[test]
  fn rejects_weight_out_of_range() {
    let err = Catalog::new(
      vec![CategoryDef {
        category: Category::KeyPerson,
        questions: vec![Question::binary("q", 6)],
      }],
      vec![],
    )
    .unwrap_err();
    assert!(err.to_string().contains("weight 6"));
  }

  #[test]
  fn rejects_duplicate_category() {
    let def = CategoryDef {
      category: Category::Scenario,
      questions: vec![Question::binary("q", 2)],
    };
    let err = Catalog::new(vec![def.clone(), def], vec![]).unwrap_err();
    assert!(err.to_string().contains("duplicate category scenario"));
  }

  #[test]
  fn rejects_question_without_max_risk_option() {
    static SOFT: [QuestionOption; 2] = [
      QuestionOption { label: "a", score: 0.0 },
      QuestionOption { label: "b", score: 0.5 },
    ];
    let err = Catalog::new(
      vec![CategoryDef {
        category: Category::Awareness,
        questions: vec![Question::custom("q", &SOFT, 2)],
      }],
      vec![],
    )
    .unwrap_err();
    assert!(err.to_string().contains("no maximal-risk option"));
  }
}
