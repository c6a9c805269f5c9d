//! Answer sets: one selected option label per question, keyed by category.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{Catalog, Category, CategoryDef, Question, QuestionOption};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<Category, Vec<String>>);

impl AnswerSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder form of [`AnswerSet::insert`].
  pub fn with<I, S>(mut self, category: Category, answers: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.insert(category, answers.into_iter().map(Into::into).collect());
    self
  }

  pub fn insert(&mut self, category: Category, answers: Vec<String>) {
    self.0.insert(category, answers);
  }

  pub fn get(&self, category: Category) -> Option<&[String]> {
    self.0.get(&category).map(Vec::as_slice)
  }

  pub fn contains(&self, category: Category) -> bool {
    self.0.contains_key(&category)
  }

  pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
    self.0.keys().copied()
  }

  /// Every question answered with its no-risk option.
  pub fn minimal_risk(catalog: &Catalog) -> Self {
    Self::pick(catalog, |def| select(def, |q| q.min_risk_option()))
  }

  /// Every question answered with its maximal-risk option.
  pub fn maximal_risk(catalog: &Catalog) -> Self {
    Self::pick(catalog, |def| select(def, |q| q.max_risk_option()))
  }

  /// Fill categories absent from the set with no-risk answers.
  /// Returns the categories that were filled, in catalog order.
  pub fn fill_missing(&mut self, catalog: &Catalog) -> Vec<Category> {
    let mut filled = Vec::new();
    for def in catalog.categories() {
      if !self.contains(def.category) {
        self.insert(def.category, select(def, |q| q.min_risk_option()));
        filled.push(def.category);
      }
    }
    filled
  }

  fn pick(catalog: &Catalog, answers_for: impl Fn(&CategoryDef) -> Vec<String>) -> Self {
    Self(
      catalog
        .categories()
        .iter()
        .map(|def| (def.category, answers_for(def)))
        .collect(),
    )
  }
}

fn select(
  def: &CategoryDef,
  option_for: impl Fn(&Question) -> Option<&'static QuestionOption>,
) -> Vec<String> {
  def
    .questions
    .iter()
    .filter_map(|q| option_for(q).map(|o| o.label.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn minimal_risk_picks_zero_score_options() {
    let catalog = Catalog::standard();
    let answers = AnswerSet::minimal_risk(&catalog);
    assert_eq!(answers.get(Category::KeyPerson).unwrap(), vec!["아니오"; 6].as_slice());
    assert_eq!(answers.get(Category::Awareness).unwrap()[0], "그렇다");
    assert_eq!(answers.get(Category::Scenario).unwrap()[2], "내부 대응 가능");
  }

  #[test]
  fn maximal_risk_picks_full_score_options() {
    let catalog = Catalog::standard();
    let answers = AnswerSet::maximal_risk(&catalog);
    assert_eq!(answers.get(Category::Corporate).unwrap(), vec!["예"; 6].as_slice());
    assert_eq!(answers.get(Category::Awareness).unwrap()[1], "아니오");
  }

  #[test]
  fn fill_missing_only_touches_absent_categories() {
    let catalog = Catalog::standard();
    let mut answers = AnswerSet::new().with(Category::KeyPerson, vec!["예"; 6]);
    let filled = answers.fill_missing(&catalog);
    assert_eq!(
      filled,
      vec![Category::Corporate, Category::Awareness, Category::Scenario]
    );
    assert_eq!(answers.get(Category::KeyPerson).unwrap()[0], "예");
    assert_eq!(answers.get(Category::Corporate).unwrap().len(), 6);
  }

  #[test]
  fn deserializes_from_snake_case_keys() {
    let json = r#"{"key_person": ["예"], "scenario": ["대응 가능"]}"#;
    let answers: AnswerSet = serde_json::from_str(json).unwrap();
    assert!(answers.contains(Category::KeyPerson));
    assert!(!answers.contains(Category::Corporate));
    assert_eq!(answers.get(Category::Scenario).unwrap(), ["대응 가능".to_string()]);
  }
}
