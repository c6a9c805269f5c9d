//! Request/report types for the diagnosis engine (JSON contract with the web host).

use serde::{Deserialize, Serialize};

use crate::answers::AnswerSet;
use crate::catalog::{Catalog, Category, QuestionOption, Solution};
use crate::facts::CompanyFacts;
use crate::risk::RiskLevel;
use crate::score::{CategoryScore, ScoredItem};

// ---------------------------------------------------------------------------
// Inbound (what the host sends)
// ---------------------------------------------------------------------------

/// One completed questionnaire. Unknown fields are silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagnosisRequest {
  #[serde(default)]
  pub facts: CompanyFacts,
  pub answers: AnswerSet,
  /// Overrides `Config::priority_limit`.
  #[serde(default)]
  pub priority_limit: Option<usize>,
  /// Overrides `Config::fill_unanswered`.
  #[serde(default)]
  pub fill_unanswered: Option<bool>,
  /// RFC 3339 or zone-less ISO timestamp for the script; defaults to the caller's clock.
  #[serde(default)]
  pub generated_at: Option<String>,
}

// ---------------------------------------------------------------------------
// Outbound (what we emit)
// ---------------------------------------------------------------------------

/// Plain numbers for gauge / radar / bar rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
  pub overall: f64,
  pub categories: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
  pub category: Category,
  pub label: &'static str,
  pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisReport {
  pub overall_percentage: f64,
  pub overall_level: RiskLevel,
  pub total_weight: u32,
  pub categories: Vec<CategoryScore>,
  pub chart: ChartSeries,
  pub priorities: Vec<ScoredItem>,
  pub solutions: Vec<Solution>,
  /// Categories substituted with no-risk answers (only with `fill_unanswered`).
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub filled_categories: Vec<Category>,
  pub generated_at: String,
  pub script: String,
}

// ---------------------------------------------------------------------------
// Catalog view (so the host can render the form)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
  pub categories: Vec<CategoryView>,
  pub solutions: Vec<Solution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
  pub category: Category,
  pub name: &'static str,
  pub total_weight: u32,
  pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
  pub prompt: &'static str,
  pub weight: u8,
  pub kind: &'static str,
  pub options: &'static [QuestionOption],
}

impl From<&Catalog> for CatalogView {
  fn from(catalog: &Catalog) -> Self {
    Self {
      categories: catalog
        .categories()
        .iter()
        .map(|def| CategoryView {
          category: def.category,
          name: def.category.name(),
          total_weight: def.total_weight(),
          questions: def
            .questions
            .iter()
            .map(|q| QuestionView {
              prompt: q.prompt,
              weight: q.weight,
              kind: q.kind.as_str(),
              options: q.options(),
            })
            .collect(),
        })
        .collect(),
      solutions: catalog.solutions().to_vec(),
    }
  }
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for rejected requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
