//! Structured error types for the diagnosis engine.

use thiserror::Error;

use crate::catalog::Category;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("answer not in domain: {category}[{index}]: {answer:?}")]
  DomainViolation {
    category: Category,
    index: usize,
    answer: String,
  },

  #[error("incomplete answers: {category}: expected {expected}, got {got}")]
  IncompleteAnswers {
    category: Category,
    expected: usize,
    got: usize,
  },

  #[error("invalid catalog: {0}")]
  InvalidCatalog(String),

  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn invalid_catalog(msg: impl Into<String>) -> Self {
    Self::InvalidCatalog(msg.into())
  }

  /// Request field the error points at, when there is one.
  pub fn field(&self) -> Option<String> {
    match self {
      Self::DomainViolation {
        category, index, ..
      } => Some(format!("answers.{}[{}]", category, index)),
      Self::IncompleteAnswers { category, .. } => Some(format!("answers.{}", category)),
      Self::Validation { field, .. } => Some(field.clone()),
      Self::InvalidCatalog(_) | Self::Json(_) => None,
    }
  }
}
