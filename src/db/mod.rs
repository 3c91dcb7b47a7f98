//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization, pragmas and migrations
//! - Default category seeding
//! - Repository layer over the `questions` and `categories` tables

pub mod migrations;
pub mod repo;
pub mod seed;

pub use migrations::init_db;
pub use repo::Repository;
pub use seed::seed_categories;
