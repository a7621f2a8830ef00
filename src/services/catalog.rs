//! Catalog service
//!
//! Single entry point for catalog operations. Binds a role at construction,
//! authorizes every call against the access policy, re-validates inputs,
//! and delegates to the book store. Holds no book state of its own; every
//! read goes to the store.

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, NewBook},
        role::{Operation, Role},
    },
    policy::AccessPolicy,
    repository::BookStore,
};

/// Command surface for external collaborators (UI, CLI)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert { title: String, author: String },
    FindByTitle { title: String },
    DeleteByTitle { title: String },
    ListAll,
    ClearAll,
    DropDatabase,
}

impl Command {
    /// Operation the command is authorized as
    pub fn operation(&self) -> Operation {
        match self {
            Command::Insert { .. } => Operation::Insert,
            Command::FindByTitle { .. } => Operation::FindByTitle,
            Command::DeleteByTitle { .. } => Operation::DeleteByTitle,
            Command::ListAll => Operation::ListAll,
            Command::ClearAll => Operation::ClearAll,
            Command::DropDatabase => Operation::DropDatabase,
        }
    }
}

/// Result of an executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Done,
    Books(Vec<Book>),
}

#[derive(Clone)]
pub struct CatalogService {
    role: Role,
    store: Arc<dyn BookStore>,
}

impl CatalogService {
    pub fn new(role: Role, store: Arc<dyn BookStore>) -> Self {
        Self { role, store }
    }

    /// Role this service was constructed with
    pub fn role(&self) -> Role {
        self.role
    }

    /// Execute a command on behalf of the bound role
    pub async fn execute(&self, command: Command) -> AppResult<CommandOutput> {
        match command {
            Command::Insert { title, author } => {
                self.insert(&NewBook::new(title, author)).await?;
                Ok(CommandOutput::Done)
            }
            Command::FindByTitle { title } => {
                Ok(CommandOutput::Books(self.find_by_title(&title).await?))
            }
            Command::DeleteByTitle { title } => {
                self.delete_by_title(&title).await?;
                Ok(CommandOutput::Done)
            }
            Command::ListAll => Ok(CommandOutput::Books(self.list_all().await?)),
            Command::ClearAll => {
                self.clear_all().await?;
                Ok(CommandOutput::Done)
            }
            Command::DropDatabase => {
                self.drop_database().await?;
                Ok(CommandOutput::Done)
            }
        }
    }

    /// Add a book to the catalog
    pub async fn insert(&self, book: &NewBook) -> AppResult<()> {
        AccessPolicy::authorize(self.role, Operation::Insert)?;

        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if book.title.trim().is_empty() || book.author.trim().is_empty() {
            return Err(AppError::Validation(
                "Title and author cannot be empty".to_string(),
            ));
        }

        self.store.insert(&book.title, &book.author).await
    }

    /// Find books by exact title
    pub async fn find_by_title(&self, title: &str) -> AppResult<Vec<Book>> {
        AccessPolicy::authorize(self.role, Operation::FindByTitle)?;
        self.store.find_by_title(title).await
    }

    /// Delete every book with the given title; deleting nothing is fine
    pub async fn delete_by_title(&self, title: &str) -> AppResult<()> {
        AccessPolicy::authorize(self.role, Operation::DeleteByTitle)?;
        self.store.delete_by_title(title).await
    }

    /// List the whole catalog in insertion order
    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        AccessPolicy::authorize(self.role, Operation::ListAll)?;
        self.store.list_all().await
    }

    /// Remove every book, keeping the table
    pub async fn clear_all(&self) -> AppResult<()> {
        AccessPolicy::authorize(self.role, Operation::ClearAll)?;
        self.store.clear_all().await
    }

    /// Drop the catalog database. Irreversible; there is no confirmation
    /// layer here.
    pub async fn drop_database(&self) -> AppResult<()> {
        AccessPolicy::authorize(self.role, Operation::DropDatabase)?;
        tracing::warn!("dropping the catalog database");
        self.store.drop_database().await
    }
}
