//! Diagnosis pipeline: score, classify, rank, match, render.

use chrono::NaiveDateTime;
use std::borrow::Cow;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::date;
use crate::error::EngineError;
use crate::priority;
use crate::score;
use crate::script;
use crate::solution;
use crate::types::*;

/// Immutable catalog + config; safe to share across independent requests.
#[derive(Debug, Clone)]
pub struct Engine {
  config: Config,
  catalog: Catalog,
}

impl Engine {
  pub fn new(config: Config, catalog: Catalog) -> Self {
    Self { config, catalog }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default(), Catalog::standard())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  /// Run one diagnosis.
  ///
  /// `now` is used for the script timestamp unless the request carries `generated_at`.
  pub fn diagnose(
    &self,
    request: &DiagnosisRequest,
    now: NaiveDateTime,
  ) -> Result<DiagnosisReport, EngineError> {
    let generated_at = match request.generated_at.as_deref() {
      Some(raw) => date::parse_generated_at(raw)
        .ok_or_else(|| EngineError::validation("generated_at", "invalid timestamp"))?,
      None => now,
    };

    let fill = request.fill_unanswered.unwrap_or(self.config.fill_unanswered);
    let mut filled_categories = Vec::new();
    let answers = if fill {
      let mut owned = request.answers.clone();
      filled_categories = owned.fill_missing(&self.catalog);
      if !filled_categories.is_empty() {
        tracing::info!(filled = ?filled_categories, "substituted no-risk answers");
      }
      Cow::Owned(owned)
    } else {
      Cow::Borrowed(&request.answers)
    };

    let summary = score::compute_scores(&self.catalog, &answers)?;
    let limit = request.priority_limit.unwrap_or(self.config.priority_limit);
    let priorities = priority::rank_priorities(&summary.items, limit);
    let solutions = solution::match_solutions(&self.catalog, &summary.items);
    let script = script::generate_script(
      &request.facts,
      &summary,
      &priorities,
      &solutions,
      generated_at,
    );

    tracing::debug!(
      overall = summary.overall_percentage,
      level = summary.overall_level.as_str(),
      priorities = priorities.len(),
      solutions = solutions.len(),
      "diagnosis complete"
    );

    let chart = ChartSeries {
      overall: summary.overall_percentage,
      categories: summary
        .categories
        .iter()
        .map(|c| ChartPoint {
          category: c.category,
          label: c.name,
          value: c.percentage,
        })
        .collect(),
    };

    Ok(DiagnosisReport {
      overall_percentage: summary.overall_percentage,
      overall_level: summary.overall_level,
      total_weight: summary.total_weight,
      categories: summary.categories,
      chart,
      priorities,
      solutions,
      filled_categories,
      generated_at: generated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
      script,
    })
  }

  pub fn catalog_view(&self) -> CatalogView {
    CatalogView::from(&self.catalog)
  }
}
