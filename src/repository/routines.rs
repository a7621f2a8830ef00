//! Stored-routine backend
//!
//! Calls the routines installed by the schema provisioner. Observable
//! behavior matches `sql::SqlBookStore` exactly; which backend runs is a
//! configuration choice, not part of the contract.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{config::DatabaseConfig, error::AppResult, models::book::Book};

use super::BookStore;

/// Book storage delegating to server-side routines
#[derive(Clone)]
pub struct RoutineBookStore {
    pool: Pool<Postgres>,
    config: DatabaseConfig,
}

impl RoutineBookStore {
    pub fn new(pool: Pool<Postgres>, config: DatabaseConfig) -> Self {
        Self { pool, config }
    }
}

#[async_trait]
impl BookStore for RoutineBookStore {
    async fn insert(&self, title: &str, author: &str) -> AppResult<()> {
        sqlx::query("SELECT insert_book($1, $2)")
            .bind(title)
            .bind(author)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Vec<Book>> {
        let books =
            sqlx::query_as::<_, Book>("SELECT id, title, author FROM search_book($1)")
                .bind(title)
                .fetch_all(&self.pool)
                .await?;
        Ok(books)
    }

    async fn delete_by_title(&self, title: &str) -> AppResult<()> {
        sqlx::query("SELECT delete_book($1)")
            .bind(title)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Book>> {
        let books =
            sqlx::query_as::<_, Book>("SELECT id, title, author FROM books ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(books)
    }

    async fn clear_all(&self) -> AppResult<()> {
        sqlx::query("SELECT clear_books()")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn drop_database(&self) -> AppResult<()> {
        super::drop_target_database(&self.pool, &self.config).await
    }
}
