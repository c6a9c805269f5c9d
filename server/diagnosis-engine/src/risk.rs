//! Risk level classification from a 0–100 risk percentage.

use serde::{Deserialize, Serialize};

/// Severity buckets, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
  Good,
  Caution,
  Warning,
  Danger,
}

/// Inclusive upper bounds; anything above the last one is `Danger`.
const THRESHOLDS: [(f64, RiskLevel); 3] = [
  (20.0, RiskLevel::Good),
  (45.0, RiskLevel::Caution),
  (70.0, RiskLevel::Warning),
];

impl RiskLevel {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Good => "good",
      Self::Caution => "caution",
      Self::Warning => "warning",
      Self::Danger => "danger",
    }
  }

  /// Korean label shown to respondents.
  pub fn label(self) -> &'static str {
    match self {
      Self::Good => "양호",
      Self::Caution => "주의",
      Self::Warning => "경계",
      Self::Danger => "위험",
    }
  }

  /// 0 (good) through 3 (danger).
  pub fn severity(self) -> u8 {
    self as u8
  }
}

/// Map a risk percentage to its level. Boundary values fall in the lower bucket.
pub fn classify(percentage: f64) -> RiskLevel {
  THRESHOLDS
    .iter()
    .find(|(upper, _)| percentage <= *upper)
    .map(|&(_, level)| level)
    .unwrap_or(RiskLevel::Danger)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn boundaries_belong_to_lower_bucket() {
    assert_eq!(classify(0.0), RiskLevel::Good);
    assert_eq!(classify(20.0), RiskLevel::Good);
    assert_eq!(classify(20.01), RiskLevel::Caution);
    assert_eq!(classify(45.0), RiskLevel::Caution);
    assert_eq!(classify(45.01), RiskLevel::Warning);
    assert_eq!(classify(70.0), RiskLevel::Warning);
    assert_eq!(classify(70.01), RiskLevel::Danger);
    assert_eq!(classify(100.0), RiskLevel::Danger);
  }

  #[test]
  fn severity_is_ordered() {
    assert_eq!(RiskLevel::Good.severity(), 0);
    assert_eq!(RiskLevel::Danger.severity(), 3);
    assert!(RiskLevel::Caution < RiskLevel::Warning);
  }

  #[test]
  fn labels() {
    assert_eq!(classify(38.46).label(), "주의");
    assert_eq!(classify(71.0).as_str(), "danger");
  }

  #[test]
  fn serializes_lowercase() {
    assert_eq!(serde_json::to_string(&RiskLevel::Warning).unwrap(), "\"warning\"");
  }
}
