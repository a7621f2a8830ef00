//! Idempotent database and schema provisioning

use sqlx::{Connection, PgConnection};

use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};

const CREATE_BOOKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    author VARCHAR(255) NOT NULL
)
"#;

/// Server-side routines backing the stored-routine store. Functionally
/// equivalent to the direct statements in `repository::sql`.
const STORED_ROUTINES: [&str; 4] = [
    r#"
    CREATE OR REPLACE FUNCTION insert_book(title_param VARCHAR, author_param VARCHAR)
    RETURNS VOID AS $$
    BEGIN
        INSERT INTO books (title, author) VALUES (title_param, author_param);
    END;
    $$ LANGUAGE plpgsql
    "#,
    r#"
    CREATE OR REPLACE FUNCTION search_book(title_param VARCHAR)
    RETURNS TABLE(id INTEGER, title VARCHAR, author VARCHAR) AS $$
    BEGIN
        RETURN QUERY SELECT b.id, b.title, b.author
        FROM books b
        WHERE b.title = title_param
        ORDER BY b.id;
    END;
    $$ LANGUAGE plpgsql
    "#,
    r#"
    CREATE OR REPLACE FUNCTION delete_book(title_param VARCHAR)
    RETURNS VOID AS $$
    BEGIN
        DELETE FROM books WHERE title = title_param;
    END;
    $$ LANGUAGE plpgsql
    "#,
    r#"
    CREATE OR REPLACE FUNCTION clear_books()
    RETURNS VOID AS $$
    BEGIN
        DELETE FROM books;
    END;
    $$ LANGUAGE plpgsql
    "#,
];

/// Ensures the catalog database, the `books` table, and the stored routines
/// exist before any repository operation runs
pub struct SchemaProvisioner {
    config: DatabaseConfig,
}

impl SchemaProvisioner {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Provision everything the repository needs. Idempotent; safe to call
    /// on every startup.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        self.ensure_database().await?;

        let mut conn = PgConnection::connect_with(&self.config.connect_options())
            .await
            .map_err(|e| {
                provision(
                    &format!("connecting to database '{}'", self.config.database),
                    e,
                )
            })?;

        sqlx::query(CREATE_BOOKS_TABLE)
            .execute(&mut conn)
            .await
            .map_err(|e| provision("creating table 'books'", e))?;

        for routine in STORED_ROUTINES {
            sqlx::query(routine)
                .execute(&mut conn)
                .await
                .map_err(|e| provision("installing stored routines", e))?;
        }

        tracing::info!(database = %self.config.database, "schema provisioned");
        Ok(())
    }

    /// Create the catalog database if it does not exist yet, via the
    /// maintenance database
    async fn ensure_database(&self) -> AppResult<()> {
        let mut conn = PgConnection::connect_with(&self.config.maintenance_connect_options())
            .await
            .map_err(|e| provision("connecting to maintenance database", e))?;

        let exists: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM pg_database WHERE datname = $1")
                .bind(&self.config.database)
                .fetch_optional(&mut conn)
                .await
                .map_err(|e| provision("checking database existence", e))?;

        if exists.is_none() {
            let stmt = format!(
                "CREATE DATABASE {}",
                quoted_identifier(&self.config.database)?
            );
            sqlx::query(&stmt).execute(&mut conn).await.map_err(|e| {
                provision(
                    &format!("creating database '{}'", self.config.database),
                    e,
                )
            })?;
            tracing::info!(database = %self.config.database, "database created");
        }

        Ok(())
    }

    /// Provision a CONNECT+SELECT-only role for the guest path.
    ///
    /// No-op unless guest credentials are configured. The access policy
    /// remains the authoritative boundary; this mirrors it inside the
    /// database.
    pub async fn ensure_read_only_role(&self) -> AppResult<()> {
        let Some(ref guest) = self.config.guest else {
            return Ok(());
        };

        let mut conn = PgConnection::connect_with(&self.config.connect_options())
            .await
            .map_err(|e| {
                provision(
                    &format!("connecting to database '{}'", self.config.database),
                    e,
                )
            })?;

        let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM pg_roles WHERE rolname = $1")
            .bind(&guest.user)
            .fetch_optional(&mut conn)
            .await
            .map_err(|e| provision("checking role existence", e))?;

        let role = quoted_identifier(&guest.user)?;

        if exists.is_none() {
            let stmt = format!(
                "CREATE ROLE {} LOGIN PASSWORD '{}'",
                role,
                guest.password.replace('\'', "''"),
            );
            sqlx::query(&stmt)
                .execute(&mut conn)
                .await
                .map_err(|e| provision(&format!("creating role '{}'", guest.user), e))?;
            tracing::info!(role = %guest.user, "read-only role created");
        }

        let grants = [
            format!(
                "GRANT CONNECT ON DATABASE {} TO {}",
                quoted_identifier(&self.config.database)?,
                role
            ),
            format!("GRANT USAGE ON SCHEMA public TO {}", role),
            format!("GRANT SELECT ON books TO {}", role),
        ];
        for grant in &grants {
            sqlx::query(grant)
                .execute(&mut conn)
                .await
                .map_err(|e| provision("granting read-only privileges", e))?;
        }

        Ok(())
    }
}

fn provision(step: &str, err: sqlx::Error) -> AppError {
    AppError::Provision(format!("{}: {}", step, err))
}

/// Quote a configuration-supplied identifier for use in DDL.
///
/// Identifiers cannot be bound as statement parameters; only names matching
/// a strict grammar are accepted, everything else is rejected before it
/// reaches SQL. User-controlled values never pass through here.
pub(crate) fn quoted_identifier(name: &str) -> AppResult<String> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if !valid {
        return Err(AppError::Provision(format!(
            "invalid identifier '{}'",
            name
        )));
    }
    Ok(format!("\"{}\"", name))
}
