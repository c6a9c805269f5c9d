//! Weighted risk percentages per category and overall.

use serde::Serialize;

use crate::answers::AnswerSet;
use crate::catalog::{Catalog, Category};
use crate::error::EngineError;
use crate::risk::{classify, RiskLevel};

/// One answered question with its risk contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
  pub text: &'static str,
  pub weight: u8,
  /// Score of the selected option, in [0, 1].
  pub score: f64,
  pub section: Category,
  /// Label of the selected option.
  pub answer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
  pub category: Category,
  pub name: &'static str,
  pub percentage: f64,
  pub weighted_sum: f64,
  pub total_weight: u32,
  pub level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
  /// Catalog order.
  pub categories: Vec<CategoryScore>,
  pub overall_percentage: f64,
  pub overall_level: RiskLevel,
  pub total_weight: u32,
  /// Every scored question, category then question order.
  pub items: Vec<ScoredItem>,
}

impl ScoreSummary {
  pub fn category(&self, category: Category) -> Option<&CategoryScore> {
    self.categories.iter().find(|c| c.category == category)
  }
}

/// weighted_sum / total_weight × 100, or 0 for an empty weight.
fn percentage(weighted_sum: f64, total_weight: u32) -> f64 {
  if total_weight == 0 {
    return 0.0;
  }
  weighted_sum / f64::from(total_weight) * 100.0
}

/// Score a complete answer set against the catalog.
///
/// Every catalog category must be present with exactly one answer per question,
/// and every answer must be one of that question's options.
pub fn compute_scores(catalog: &Catalog, answers: &AnswerSet) -> Result<ScoreSummary, EngineError> {
  let mut categories = Vec::with_capacity(catalog.categories().len());
  let mut items = Vec::with_capacity(catalog.question_count());
  let mut overall_sum = 0.0;
  let mut overall_weight = 0u32;

  for def in catalog.categories() {
    let selected = answers.get(def.category).unwrap_or(&[]);
    if selected.len() != def.questions.len() {
      return Err(EngineError::IncompleteAnswers {
        category: def.category,
        expected: def.questions.len(),
        got: selected.len(),
      });
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0u32;
    for (index, (question, answer)) in def.questions.iter().zip(selected).enumerate() {
      let option = question
        .resolve(answer)
        .ok_or_else(|| EngineError::DomainViolation {
          category: def.category,
          index,
          answer: answer.clone(),
        })?;
      weighted_sum += option.score * f64::from(question.weight);
      total_weight += u32::from(question.weight);
      items.push(ScoredItem {
        text: question.prompt,
        weight: question.weight,
        score: option.score,
        section: def.category,
        answer: option.label,
      });
    }

    let pct = percentage(weighted_sum, total_weight);
    categories.push(CategoryScore {
      category: def.category,
      name: def.category.name(),
      percentage: pct,
      weighted_sum,
      total_weight,
      level: classify(pct),
    });
    overall_sum += weighted_sum;
    overall_weight += total_weight;
  }

  for extra in answers.categories().filter(|c| catalog.category(*c).is_none()) {
    tracing::debug!(category = %extra, "ignoring answers for category not in catalog");
  }

  // Roll up raw sums, not category percentages: heavier categories count more.
  let overall_percentage = percentage(overall_sum, overall_weight);
  Ok(ScoreSummary {
    categories,
    overall_percentage,
    overall_level: classify(overall_percentage),
    total_weight: overall_weight,
    items,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::{CategoryDef, Question};

  fn key_person_only(weights: &[u8]) -> Catalog {
    Catalog::new(
      vec![CategoryDef {
        category: Category::KeyPerson,
        questions: weights.iter().map(|&w| Question::binary("q", w)).collect(),
      }],
      vec![],
    )
    .unwrap()
  }

  #[test]
  fn weighted_percentage_for_single_category() {
    let catalog = key_person_only(&[4, 5, 4, 3, 5, 5]);
    let answers = AnswerSet::new().with(
      Category::KeyPerson,
      ["아니오", "예", "아니오", "아니오", "예", "아니오"],
    );
    let summary = compute_scores(&catalog, &answers).unwrap();
    let kp = summary.category(Category::KeyPerson).unwrap();
    assert_eq!(kp.weighted_sum, 10.0);
    assert_eq!(kp.total_weight, 26);
    assert!((kp.percentage - 1000.0 / 26.0).abs() < 1e-9);
    assert_eq!(kp.level, RiskLevel::Caution);
  }

  #[test]
  fn partial_answer_counts_half() {
    let catalog = key_person_only(&[2, 2]);
    let answers = AnswerSet::new().with(Category::KeyPerson, ["일부 해당", "아니오"]);
    let summary = compute_scores(&catalog, &answers).unwrap();
    assert_eq!(summary.overall_percentage, 25.0);
    assert_eq!(summary.items[0].score, 0.5);
    assert_eq!(summary.items[0].answer, "일부 해당");
  }

  #[test]
  fn empty_category_scores_zero() {
    let catalog = key_person_only(&[]);
    let answers = AnswerSet::new().with(Category::KeyPerson, Vec::<String>::new());
    let summary = compute_scores(&catalog, &answers).unwrap();
    assert_eq!(summary.categories[0].percentage, 0.0);
    assert_eq!(summary.overall_percentage, 0.0);
  }

  #[test]
  fn unknown_answer_is_rejected_not_zeroed() {
    let catalog = key_person_only(&[3, 3]);
    let answers = AnswerSet::new().with(Category::KeyPerson, ["아니오", "글쎄요"]);
    let err = compute_scores(&catalog, &answers).unwrap_err();
    match err {
      EngineError::DomainViolation {
        category,
        index,
        answer,
      } => {
        assert_eq!(category, Category::KeyPerson);
        assert_eq!(index, 1);
        assert_eq!(answer, "글쎄요");
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn short_answer_list_is_rejected() {
    let catalog = key_person_only(&[3, 3, 3]);
    let answers = AnswerSet::new().with(Category::KeyPerson, ["예"]);
    let err = compute_scores(&catalog, &answers).unwrap_err();
    assert!(matches!(
      err,
      EngineError::IncompleteAnswers {
        expected: 3,
        got: 1,
        ..
      }
    ));
  }

  #[test]
  fn missing_category_is_rejected() {
    let catalog = Catalog::standard();
    let answers = AnswerSet::new().with(Category::KeyPerson, vec!["아니오"; 6]);
    let err = compute_scores(&catalog, &answers).unwrap_err();
    assert_eq!(err.field().as_deref(), Some("answers.corporate"));
  }

  #[test]
  fn overall_is_weight_weighted_not_flat_mean() {
    let catalog = Catalog::standard();
    let mut answers = AnswerSet::minimal_risk(&catalog);
    // Only the light awareness category (weight 11) at full risk.
    answers.insert(
      Category::Awareness,
      vec!["아니다".into(), "아니오".into(), "아니오".into()],
    );
    let summary = compute_scores(&catalog, &answers).unwrap();
    assert_eq!(summary.category(Category::Awareness).unwrap().percentage, 100.0);
    assert!((summary.overall_percentage - 1100.0 / 73.0).abs() < 1e-9);
    // A flat mean of the four categories would be 25%.
    assert!((summary.overall_percentage - 25.0).abs() > 1.0);
  }
}
