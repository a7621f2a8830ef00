//! Direct parameterized-statement backend

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{config::DatabaseConfig, error::AppResult, models::book::Book};

use super::BookStore;

/// Book storage speaking plain parameterized SQL
#[derive(Clone)]
pub struct SqlBookStore {
    pool: Pool<Postgres>,
    config: DatabaseConfig,
}

impl SqlBookStore {
    pub fn new(pool: Pool<Postgres>, config: DatabaseConfig) -> Self {
        Self { pool, config }
    }
}

#[async_trait]
impl BookStore for SqlBookStore {
    async fn insert(&self, title: &str, author: &str) -> AppResult<()> {
        sqlx::query("INSERT INTO books (title, author) VALUES ($1, $2)")
            .bind(title)
            .bind(author)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author FROM books WHERE title = $1 ORDER BY id",
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    async fn delete_by_title(&self, title: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE title = $1")
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
        sqlx::query("DELETE FROM books").execute(&self.pool).await?;
        Ok(())
    }

    async fn drop_database(&self) -> AppResult<()> {
        super::drop_target_database(&self.pool, &self.config).await
    }
}
