//! Quiz-play question selection.
//!
//! The server keeps no quiz session: the client sends every question id it
//! has already been shown, and each request draws uniformly from the
//! category's questions that are not in that history.

use crate::domain::Question;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// A quiz-play request after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub previous: HashSet<i64>,
    pub category: i64,
}

impl QuizRequest {
    /// Returns `None` when the history or the category is absent or falsy
    /// (an empty history, or category id 0).
    pub fn new(previous: Option<Vec<i64>>, category: Option<i64>) -> Option<Self> {
        let previous = previous.filter(|p| !p.is_empty())?;
        let category = category.filter(|c| *c != 0)?;
        Some(Self {
            previous: previous.into_iter().collect(),
            category,
        })
    }
}

/// Result of one selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome<'a> {
    /// An unseen question from the category.
    Next(&'a Question),
    /// Every question in the category has been served.
    Finished,
}

/// Questions of `pool` whose ids are not in `previous`, in pool order.
fn unseen<'a>(pool: &'a [Question], previous: &HashSet<i64>) -> Vec<&'a Question> {
    pool.iter().filter(|q| !previous.contains(&q.id)).collect()
}

/// Pick the next quiz question from `pool`.
///
/// Draws once from the unseen subset, so it never returns a question in
/// `previous` and never loops. `Finished` is returned exactly when the unseen
/// subset is empty.
pub fn select_next<'a, R>(
    pool: &'a [Question],
    previous: &HashSet<i64>,
    rng: &mut R,
) -> QuizOutcome<'a>
where
    R: Rng + ?Sized,
{
    match unseen(pool, previous).choose(rng) {
        Some(q) => QuizOutcome::Next(*q),
        None => QuizOutcome::Finished,
    }
}
