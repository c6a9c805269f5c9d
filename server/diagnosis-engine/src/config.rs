//! Engine configuration with sane defaults.

use crate::priority::DEFAULT_PRIORITY_LIMIT;

/// Host-side tunables. Question sets, weights and thresholds are fixed and not part of this.
#[derive(Debug, Clone)]
pub struct Config {
  /// Max number of priority items kept after ranking.
  pub priority_limit: usize,
  /// Substitute the no-risk answer for categories missing from a request.
  /// Off by default: an incomplete answer set is rejected.
  pub fill_unanswered: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      priority_limit: DEFAULT_PRIORITY_LIMIT,
      fill_unanswered: false,
    }
  }
}
