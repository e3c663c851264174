use rand::rng;

use quiz_core::Clock;
use quiz_core::model::{Catalog, GuessOutcome, PerformanceRecord, QuizRound};
use quiz_core::selector::{self, DEFAULT_EXPLORATION_RATE};
use quiz_core::summary::{SummaryRow, summarize};
use storage::repository::PerformanceRepository;

use crate::error::QuizServiceError;

/// Orchestrates the quiz loop: select an item, build its choices, take the
/// guess, record it, persist the record.
///
/// The service owns the in-memory performance record for the whole session;
/// the presentation layer owns each `QuizRound` and replaces it on advance.
pub struct QuizService {
    catalog: Catalog,
    record: PerformanceRecord,
    store: Box<dyn PerformanceRepository>,
    exploration_rate: f64,
    clock: Clock,
}

impl QuizService {
    /// Opens a quiz session, loading the persisted record once.
    ///
    /// # Errors
    ///
    /// Propagates `StorageError::Parse` for a malformed snapshot and
    /// `StorageError::Io` for read failures; neither is repaired here.
    pub fn open(
        catalog: Catalog,
        store: Box<dyn PerformanceRepository>,
    ) -> Result<Self, QuizServiceError> {
        let record = store.load()?;
        tracing::debug!(entries = record.len(), "performance record loaded");

        Ok(Self {
            catalog,
            record,
            store,
            exploration_rate: DEFAULT_EXPLORATION_RATE,
            clock: Clock::default_clock(),
        })
    }

    /// Overrides the exploration rate (default 0.1).
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::InvalidExplorationRate` when outside `[0, 1]`.
    pub fn with_exploration_rate(mut self, rate: f64) -> Result<Self, QuizServiceError> {
        self.exploration_rate = selector::validate_exploration_rate(rate)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Starts a fresh round: picks the next item and builds its choice set.
    ///
    /// The returned round caches its choices; they are not regenerated until
    /// the caller starts another round.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::NotEnoughItems` when the catalog has fewer
    /// than three entries.
    pub fn start_round(&self) -> Result<QuizRound, QuizServiceError> {
        let mut rng = rng();
        let item = selector::select_next(
            &self.catalog,
            &self.record,
            self.exploration_rate,
            &mut rng,
        );
        let choices = selector::generate_choices(item, &self.catalog, &mut rng)?;
        tracing::debug!(code = %item.code(), "round started");

        Ok(QuizRound::new(item.clone(), choices, self.clock.now()))
    }

    /// Submits the user's guess for `round`.
    ///
    /// The first submission records the answer and persists the whole record;
    /// re-submitting an answered round is a no-op returning `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` when the persist fails. The in-memory
    /// record keeps the answer either way; the next successful persist
    /// includes it.
    pub fn submit_guess(
        &mut self,
        round: &mut QuizRound,
        guess: &str,
    ) -> Result<Option<GuessOutcome>, QuizServiceError> {
        let Some(outcome) = round.submit(guess) else {
            return Ok(None);
        };

        self.record
            .record_answer(round.item().code(), outcome.is_correct);
        self.store.save(&self.record)?;
        tracing::debug!(
            code = %round.item().code(),
            correct = outcome.is_correct,
            "answer recorded and persisted"
        );

        Ok(Some(outcome))
    }

    /// Performance table rows, weakest items first.
    #[must_use]
    pub fn summary(&self) -> Vec<SummaryRow> {
        summarize(&self.record, &self.catalog)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn record(&self) -> &PerformanceRecord {
        &self.record
    }

    #[must_use]
    pub fn exploration_rate(&self) -> f64 {
        self.exploration_rate
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
