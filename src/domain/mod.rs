//! Domain types for the trivia API.
//!
//! This module provides:
//! - `Question` / `NewQuestion` records with their difficulty range
//! - `Category` and the `{id: type}` map shape used by listing endpoints

pub mod category;
pub mod question;

pub use category::{category_map, Category, CategoryMap};
pub use question::{NewQuestion, Question, MAX_DIFFICULTY, MIN_DIFFICULTY};
