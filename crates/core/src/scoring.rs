//! Scoring module - points awarded per removed group
//!
//! Classic SameGame rule: removing a group of `n` elements is worth
//! `(n - 2)^2` points. Pairs are free, larger groups pay off quadratically,
//! which rewards setting up big combos over clearing pairs greedily.

use crate::types::MIN_MATCH_SIZE;

/// Points for removing a group of `group_size` elements.
///
/// Groups smaller than [`MIN_MATCH_SIZE`] are not moves and score 0.
/// Saturates at `u32::MAX` instead of overflowing.
pub fn calculate_points(group_size: usize) -> u32 {
    if group_size < MIN_MATCH_SIZE {
        return 0;
    }
    let base = u32::try_from(group_size - MIN_MATCH_SIZE).unwrap_or(u32::MAX);
    base.saturating_mul(base)
}
