use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::item::ItemCode;

//
// ─── ITEM STATS ────────────────────────────────────────────────────────────────
//

/// Tally of correct and wrong answers for a single item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStats {
    pub correct: u32,
    pub wrong: u32,
}

impl ItemStats {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.correct.saturating_add(self.wrong)
    }

    /// `correct − wrong`; lower means weaker performance.
    #[must_use]
    pub fn score(&self) -> i64 {
        i64::from(self.correct) - i64::from(self.wrong)
    }
}

//
// ─── PERFORMANCE RECORD ────────────────────────────────────────────────────────
//

/// Persisted tally of answers per item code.
///
/// Entries are created on the first recorded answer and never deleted. An
/// absent entry reads as a zeroed `ItemStats`; lookups never mutate the map.
///
/// Serializes as a flat JSON object, e.g.
/// `{"US": {"correct": 3, "wrong": 1}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceRecord {
    entries: HashMap<ItemCode, ItemStats>,
}

impl PerformanceRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit lookup with a zeroed default.
    #[must_use]
    pub fn stats_for(&self, code: &ItemCode) -> ItemStats {
        self.entries.get(code).copied().unwrap_or_default()
    }

    /// Selection score for an item; missing record reads as 0.
    #[must_use]
    pub fn score(&self, code: &ItemCode) -> i64 {
        self.stats_for(code).score()
    }

    /// Records one answer, creating a zeroed entry when absent.
    ///
    /// Every call increments exactly one counter; this is intentionally not
    /// idempotent, each call is one answer.
    pub fn record_answer(&mut self, code: &ItemCode, is_correct: bool) {
        let stats = self.entries.entry(code.clone()).or_default();
        if is_correct {
            stats.correct = stats.correct.saturating_add(1);
        } else {
            stats.wrong = stats.wrong.saturating_add(1);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemCode, &ItemStats)> {
        self.entries.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
