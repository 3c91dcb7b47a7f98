pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;

pub use config::Config;
pub use db::{init_db, seed_categories, Repository};
pub use domain::{Category, NewQuestion, Question};
pub use engine::{paginate, select_next, PageRequest, QuizOutcome, QuizRequest};
pub use error::AppError;
