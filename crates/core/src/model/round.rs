use chrono::{DateTime, Utc};

use crate::model::item::Item;

/// Outcome reported for the first guess of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub is_correct: bool,
    pub correct_name: String,
}

/// Ephemeral state for a single quiz round.
///
/// Created by the services layer when a round starts and replaced wholesale
/// when the session advances; the presentation layer owns its lifetime. The
/// choice list is generated once at construction and stays stable until the
/// round is replaced, so re-renders always see the same three options.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizRound {
    item: Item,
    choices: Vec<String>,
    guess: Option<String>,
    answered: bool,
    started_at: DateTime<Utc>,
}

impl QuizRound {
    #[must_use]
    pub fn new(item: Item, choices: Vec<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            item,
            choices,
            guess: None,
            answered: false,
            started_at,
        }
    }

    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// The three display names offered for this round, in render order.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn guess(&self) -> Option<&str> {
        self.guess.as_deref()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Records the user's guess.
    ///
    /// The first submission marks the round answered and reports whether the
    /// guess matched the item's name. Submitting again is a no-op and returns
    /// `None`; it is not an error.
    pub fn submit(&mut self, guess: impl Into<String>) -> Option<GuessOutcome> {
        if self.answered {
            return None;
        }

        let guess = guess.into();
        let is_correct = guess == self.item.name();
        self.guess = Some(guess);
        self.answered = true;

        Some(GuessOutcome {
            is_correct,
            correct_name: self.item.name().to_owned(),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
