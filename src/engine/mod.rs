//! Request-independent logic: page slicing and quiz question selection.

pub mod paginator;
pub mod quiz;

pub use paginator::{paginate, PageRequest};
pub use quiz::{select_next, QuizOutcome, QuizRequest};
