//! Top-N ranking of answered items that carry risk.

use crate::score::ScoredItem;

pub const DEFAULT_PRIORITY_LIMIT: usize = 5;

/// Items with score > 0, highest score first, then heaviest weight.
/// Equal keys keep catalog order (stable sort). Empty when nothing carries risk.
pub fn rank_priorities(items: &[ScoredItem], limit: usize) -> Vec<ScoredItem> {
  let mut ranked: Vec<ScoredItem> = items.iter().filter(|it| it.score > 0.0).cloned().collect();
  ranked.sort_by(|a, b| {
    b.score
      .total_cmp(&a.score)
      .then_with(|| b.weight.cmp(&a.weight))
  });
  ranked.truncate(limit);
  ranked
}
