//! Clap entity - one row per (user, article), capped count
//!
//! A repeat clap from the same user updates the existing row rather than
//! inserting a new one. The applied (post-cap) delta is what propagates to
//! the article's counter and the author's received total.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Hard per-user-per-article cap
pub const CLAP_CAP: i32 = 50;

/// The outcome of applying a clap delta against an existing count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedClap {
    /// Resulting per-user count, in [1, CLAP_CAP]
    pub new_count: i32,
    /// The delta that actually landed after capping; zero when already at
    /// the cap (a successful no-op, not an error)
    pub applied_delta: i32,
}

/// Clap ledger row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clap {
    pub user_id: Snowflake,
    pub article_id: Snowflake,
    pub count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Clap {
    /// Create a first clap row for a (user, article) pair
    pub fn new(user_id: Snowflake, article_id: Snowflake, delta: i32) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            article_id,
            count: delta.clamp(1, CLAP_CAP),
            created_at: now,
            updated_at: now,
        }
    }

    /// Pure capping arithmetic: `min(existing + delta, CLAP_CAP)`.
    ///
    /// `existing` of zero models the no-row-yet case.
    pub fn apply(existing: i32, delta: i32) -> AppliedClap {
        debug_assert!(delta >= 1);
        let new_count = (existing.saturating_add(delta)).min(CLAP_CAP);
        AppliedClap {
            new_count,
            applied_delta: new_count - existing,
        }
    }

    #[inline]
    pub fn at_cap(&self) -> bool {
        self.count >= CLAP_CAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_from_zero() {
        let applied = Clap::apply(0, 5);
        assert_eq!(applied.new_count, 5);
        assert_eq!(applied.applied_delta, 5);
    }

    #[test]
    fn test_apply_caps_at_fifty() {
        let applied = Clap::apply(45, 10);
        assert_eq!(applied.new_count, 50);
        assert_eq!(applied.applied_delta, 5);
    }

    #[test]
    fn test_apply_at_cap_is_noop() {
        let applied = Clap::apply(50, 1);
        assert_eq!(applied.new_count, 50);
        assert_eq!(applied.applied_delta, 0);
    }

    #[test]
    fn test_apply_sequence_matches_min_of_sum() {
        // For deltas d1..dn the stored count equals min(sum(di), 50)
        let deltas = [1, 7, 3, 20, 30, 9];
        let mut count = 0;
        let mut applied_total = 0;
        for d in deltas {
            let applied = Clap::apply(count, d);
            count = applied.new_count;
            applied_total += applied.applied_delta;
        }
        let sum: i32 = deltas.iter().sum();
        assert_eq!(count, sum.min(CLAP_CAP));
        assert_eq!(applied_total, count);
    }

    #[test]
    fn test_new_clamps_oversized_delta() {
        let clap = Clap::new(Snowflake::new(1), Snowflake::new(2), 120);
        assert_eq!(clap.count, CLAP_CAP);
        assert!(clap.at_cap());
    }
}
