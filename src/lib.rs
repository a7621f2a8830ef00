//! Libris Library Catalog Core
//!
//! Data-access and authorization core for a PostgreSQL-backed library
//! catalog. Provisions the schema, executes CRUD on the `books` table, and
//! gates every operation behind a two-role access policy. Presentation
//! layers construct a [`services::catalog::CatalogService`] and render its
//! typed results and errors; they never touch storage themselves.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod policy;
pub mod repository;
pub mod schema;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
