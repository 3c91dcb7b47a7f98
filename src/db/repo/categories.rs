//! Category lookups for the repository.

use crate::domain::Category;
use sqlx::Row;

use super::Repository;

impl Repository {
    /// All categories ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Category {
                id: row.get("id"),
                kind: row.get("type"),
            })
            .collect())
    }

    /// Look up one category.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        let row = sqlx::query("SELECT id, type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| Category {
            id: r.get("id"),
            kind: r.get("type"),
        }))
    }
}
