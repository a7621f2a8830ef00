//! Repository layer for database operations

pub mod routines;
pub mod sql;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgConnection, Pool, Postgres};

use crate::{config::DatabaseConfig, error::AppResult, models::book::Book};

/// Storage contract shared by the direct-SQL and stored-routine backends.
///
/// Every string input is passed as a bound parameter; the backends never
/// concatenate caller values into statements.
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn insert(&self, title: &str, author: &str) -> AppResult<()>;
    /// Exact, case-sensitive match; an empty result is not an error
    async fn find_by_title(&self, title: &str) -> AppResult<Vec<Book>>;
    /// Zero matched rows is a no-op, not an error
    async fn delete_by_title(&self, title: &str) -> AppResult<()>;
    /// All books in insertion (id) order
    async fn list_all(&self) -> AppResult<Vec<Book>>;
    async fn clear_all(&self) -> AppResult<()>;
    /// Terminal: afterwards every operation on this store fails until the
    /// schema is provisioned again
    async fn drop_database(&self) -> AppResult<()>;
}

/// Connect a pool sized from configuration
pub async fn connect(config: &DatabaseConfig) -> AppResult<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_with(config.connect_options())
        .await?;
    Ok(pool)
}

/// Build the backend selected by configuration
pub fn book_store(pool: Pool<Postgres>, config: &DatabaseConfig) -> Arc<dyn BookStore> {
    if config.use_routines {
        Arc::new(routines::RoutineBookStore::new(pool, config.clone()))
    } else {
        Arc::new(sql::SqlBookStore::new(pool, config.clone()))
    }
}

/// Close the pool, then drop the catalog database through the maintenance
/// connection. Shared by both backends.
pub(crate) async fn drop_target_database(
    pool: &Pool<Postgres>,
    config: &DatabaseConfig,
) -> AppResult<()> {
    pool.close().await;

    let mut conn = PgConnection::connect_with(&config.maintenance_connect_options()).await?;
    let stmt = format!(
        "DROP DATABASE IF EXISTS {}",
        crate::schema::quoted_identifier(&config.database)?
    );
    sqlx::query(&stmt).execute(&mut conn).await?;

    tracing::info!(database = %config.database, "database dropped");
    Ok(())
}
