use crate::model::{Catalog, PerformanceRecord};

/// One row of the performance table shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub name: String,
    pub correct: u32,
    pub wrong: u32,
    pub total: u32,
    /// Percentage of correct answers, rounded to one decimal.
    pub accuracy: f64,
}

/// Builds display rows for every item the record has seen.
///
/// Rows are sorted ascending by accuracy so the weakest items come first,
/// with the display name as a deterministic tie-break. Items the user never
/// answered have no entry and never appear. A recorded code the catalog does
/// not know is shown under its raw code.
#[must_use]
pub fn summarize(record: &PerformanceRecord, catalog: &Catalog) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = record
        .iter()
        .filter(|(_, stats)| stats.total() > 0)
        .map(|(code, stats)| {
            let name = catalog
                .name_of(code)
                .map_or_else(|| code.to_string(), str::to_owned);
            let total = stats.total();
            SummaryRow {
                name,
                correct: stats.correct,
                wrong: stats.wrong,
                total,
                accuracy: round_to_tenth(100.0 * f64::from(stats.correct) / f64::from(total)),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.accuracy
            .total_cmp(&b.accuracy)
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
