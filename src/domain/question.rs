//! Trivia question records.

use serde::Serialize;

/// Lowest accepted difficulty rating.
pub const MIN_DIFFICULTY: i64 = 1;
/// Highest accepted difficulty rating.
pub const MAX_DIFFICULTY: i64 = 5;

/// A stored trivia question. This is also its JSON shape on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// A question that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    /// Whether the difficulty lies in the accepted 1..=5 range.
    pub fn has_valid_difficulty(&self) -> bool {
        (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty)
    }
}
