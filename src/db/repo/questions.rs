//! Question operations for the repository.

use crate::domain::{NewQuestion, Question};
use crate::engine::PageRequest;

use super::{row_to_question, Repository};

impl Repository {
    /// Total number of stored questions.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn count_questions(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// One page of all questions ordered by id, paged in SQL.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_questions_page(
        &self,
        page: &PageRequest,
    ) -> Result<Vec<Question>, sqlx::Error> {
        // SQLite integers are i64; offsets past that can't hold rows anyway
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(i64::from(page.limit()))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_question).collect())
    }

    /// All questions in a category ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn questions_in_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?
            ORDER BY id ASC
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_question).collect())
    }

    /// Questions whose text contains `term`, ignoring ASCII case, ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE instr(lower(question), lower(?)) > 0
            ORDER BY id ASC
            "#,
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_question).collect())
    }

    /// Look up one question.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_question(&self, id: i64) -> Result<Option<Question>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_question))
    }

    /// Insert a question and return the stored row.
    ///
    /// # Errors
    /// Returns an error if the insert violates a constraint (unknown
    /// category, difficulty outside 1..=5) or the query fails.
    pub async fn insert_question(&self, new: &NewQuestion) -> Result<Question, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(new.question.as_str())
        .bind(new.answer.as_str())
        .bind(new.category)
        .bind(new.difficulty)
        .execute(&self.pool)
        .await?;

        Ok(Question {
            id: result.last_insert_rowid(),
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        })
    }

    /// Delete one question. Returns `false` if no row had that id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn delete_question(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
