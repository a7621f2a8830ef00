//! Book model and input payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Catalog record
///
/// `id` is assigned by the database and immutable once created. Duplicate
/// `(title, author)` pairs are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
}

/// Insert request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: String,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}
