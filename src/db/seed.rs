//! Default category rows. Categories have no write endpoint, so a fresh
//! database gets the standard trivia set at boot.

use sqlx::sqlite::SqlitePool;
use tracing::info;

pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// Insert any missing default categories. Existing rows are left untouched.
///
/// Returns the number of rows inserted.
pub async fn seed_categories(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    let mut tx = pool.begin().await?;

    for (id, kind) in DEFAULT_CATEGORIES {
        let result = sqlx::query("INSERT OR IGNORE INTO categories (id, type) VALUES (?, ?)")
            .bind(id)
            .bind(kind)
            .execute(&mut *tx)
            .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    if inserted > 0 {
        info!(inserted, "Seeded default categories");
    }
    Ok(inserted)
}
