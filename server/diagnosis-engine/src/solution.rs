//! Matching remediation solutions to the categories that carry risk.

use crate::catalog::{Catalog, Category, Solution, Trigger};
use crate::score::ScoredItem;

/// Which parts of the questionnaire have at least one item scored above zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskExposure {
  pub key_person: bool,
  pub corporate: bool,
  pub any: bool,
}

impl RiskExposure {
  pub fn from_items(items: &[ScoredItem]) -> Self {
    let risky = |section: Option<Category>| {
      items
        .iter()
        .any(|it| it.score > 0.0 && section.map_or(true, |s| it.section == s))
    };
    Self {
      key_person: risky(Some(Category::KeyPerson)),
      corporate: risky(Some(Category::Corporate)),
      any: risky(None),
    }
  }

  pub fn fires(&self, trigger: Trigger) -> bool {
    match trigger {
      Trigger::KeyPerson => self.key_person,
      Trigger::Corporate => self.corporate,
      Trigger::Any => self.any,
    }
  }
}

/// Catalog solutions whose trigger fires, in catalog order.
pub fn match_solutions(catalog: &Catalog, items: &[ScoredItem]) -> Vec<Solution> {
  let exposure = RiskExposure::from_items(items);
  catalog
    .solutions()
    .iter()
    .filter(|s| exposure.fires(s.trigger))
    .cloned()
    .collect()
}
