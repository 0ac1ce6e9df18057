//! Flag storage repository.

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use super::model::OrderFlag;
use crate::Result;

/// Repository for order flags.
#[derive(Debug, Clone)]
pub struct FlagRepository {
    pool: SqlitePool,
}

impl FlagRepository {
    /// Create a new repository with the given database path.
    ///
    /// Creates the database and tables if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn new(database_path: &str) -> Result<Self> {
        let url = format!("sqlite:{database_path}?mode=rwc");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Create an in-memory repository for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Initialize database schema.
    async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS order_flags (
                order_id TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                flagged_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Store the flag of an order, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn set(&self, flag: &OrderFlag) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO order_flags (order_id, value, flagged_at)
            VALUES (?, ?, ?)
            ON CONFLICT(order_id) DO UPDATE SET
                value = excluded.value,
                flagged_at = excluded.flagged_at
            ",
        )
        .bind(&flag.order_id)
        .bind(&flag.value)
        .bind(flag.flagged_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get the flag of an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(&self, order_id: &str) -> Result<Option<OrderFlag>> {
        let row = sqlx::query(
            r"
            SELECT order_id, value, flagged_at
            FROM order_flags
            WHERE order_id = ?
            ",
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| {
            let flagged_at: String = row.get("flagged_at");
            OrderFlag {
                order_id: row.get("order_id"),
                value: row.get("value"),
                flagged_at: DateTime::parse_from_rfc3339(&flagged_at)
                    .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc)),
            }
        }))
    }

    /// Remove the flag of an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(&self, order_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM order_flags WHERE order_id = ?")
            .bind(order_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Count stored flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM order_flags")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("count"))
    }
}
