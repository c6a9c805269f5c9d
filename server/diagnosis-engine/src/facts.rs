//! Optional company facts and the placeholders used when they are missing.

use serde::{Deserialize, Serialize};

pub const COMPANY_PLACEHOLDER: &str = "○○(주)";
pub const INDUSTRY_PLACEHOLDER: &str = "업종 미입력";
pub const EMPLOYEES_PLACEHOLDER: &str = "?";
pub const CEO_PLACEHOLDER: &str = "대표자";
pub const UNSET_PLACEHOLDER: &str = "미입력";

/// Free-form facts collected with the questionnaire. Nothing is validated
/// beyond presence; blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyFacts {
  #[serde(default)]
  pub company: Option<String>,
  #[serde(default)]
  pub industry: Option<String>,
  /// Head-count bracket, e.g. "10~30명".
  #[serde(default)]
  pub employees: Option<String>,
  #[serde(default)]
  pub ceo: Option<String>,
  /// Incorporation age bracket, e.g. "10~20년".
  #[serde(default)]
  pub established: Option<String>,
  /// Annual revenue bracket, e.g. "50~100억".
  #[serde(default)]
  pub revenue: Option<String>,
}

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
  value
    .as_deref()
    .map(str::trim)
    .filter(|v| !v.is_empty())
    .unwrap_or(placeholder)
}

impl CompanyFacts {
  pub fn company(&self) -> &str {
    or_placeholder(&self.company, COMPANY_PLACEHOLDER)
  }

  pub fn industry(&self) -> &str {
    or_placeholder(&self.industry, INDUSTRY_PLACEHOLDER)
  }

  /// Head count without a trailing "명" unit; the script appends it.
  pub fn employees(&self) -> &str {
    let value = or_placeholder(&self.employees, EMPLOYEES_PLACEHOLDER);
    match value.trim_end_matches('명').trim_end() {
      "" => EMPLOYEES_PLACEHOLDER,
      stripped => stripped,
    }
  }

  pub fn ceo(&self) -> &str {
    or_placeholder(&self.ceo, CEO_PLACEHOLDER)
  }

  pub fn established(&self) -> &str {
    or_placeholder(&self.established, UNSET_PLACEHOLDER)
  }

  pub fn revenue(&self) -> &str {
    or_placeholder(&self.revenue, UNSET_PLACEHOLDER)
  }
}
