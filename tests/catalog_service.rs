//! Catalog service tests against a mocked store
//!
//! The mock panics on any unexpected call, so denial and validation tests
//! also prove that no repository access happens.

use std::sync::Arc;

use libris::error::{AppError, AppResult};
use libris::models::book::{Book, NewBook};
use libris::models::role::Role;
use libris::repository::BookStore;
use libris::services::catalog::{CatalogService, Command, CommandOutput};
use tokio_test::assert_ok;

mockall::mock! {
    Store {}

    #[async_trait::async_trait]
    impl BookStore for Store {
        async fn insert(&self, title: &str, author: &str) -> AppResult<()>;
        async fn find_by_title(&self, title: &str) -> AppResult<Vec<Book>>;
        async fn delete_by_title(&self, title: &str) -> AppResult<()>;
        async fn list_all(&self) -> AppResult<Vec<Book>>;
        async fn clear_all(&self) -> AppResult<()>;
        async fn drop_database(&self) -> AppResult<()>;
    }
}

fn service(role: Role, store: MockStore) -> CatalogService {
    CatalogService::new(role, Arc::new(store))
}

#[tokio::test]
async fn guest_mutations_are_denied_before_any_store_access() {
    // No expectations: any store call panics the test
    let svc = service(Role::Guest, MockStore::new());

    let denied = [
        Command::Insert {
            title: "Dune".into(),
            author: "Herbert".into(),
        },
        Command::DeleteByTitle {
            title: "Dune".into(),
        },
        Command::ClearAll,
        Command::DropDatabase,
    ];

    for command in denied {
        let err = svc.execute(command.clone()).await.unwrap_err();
        assert!(
            matches!(err, AppError::Authorization(_)),
            "expected authorization error for {:?}, got {:?}",
            command,
            err
        );
    }
}

#[tokio::test]
async fn guest_may_read() {
    let mut store = MockStore::new();
    store
        .expect_find_by_title()
        .withf(|title| title == "Dune")
        .times(1)
        .returning(|_| Ok(vec![]));
    store.expect_list_all().times(1).returning(|| Ok(vec![]));

    let svc = service(Role::Guest, store);
    tokio_test::assert_ok!(svc.find_by_title("Dune").await);
    tokio_test::assert_ok!(svc.list_all().await);
}

#[tokio::test]
async fn empty_fields_fail_validation_without_store_access() {
    let svc = service(Role::Administrator, MockStore::new());

    for book in [
        NewBook::new("", "Author"),
        NewBook::new("Title", ""),
        NewBook::new("   ", "Author"),
    ] {
        let err = svc.insert(&book).await.unwrap_err();
        assert!(
            matches!(err, AppError::Validation(_)),
            "expected validation error for {:?}, got {:?}",
            book,
            err
        );
    }
}

#[tokio::test]
async fn insert_delegates_with_the_original_values() {
    let mut store = MockStore::new();
    store
        .expect_insert()
        .withf(|title, author| title == "Dune" && author == "Herbert")
        .times(1)
        .returning(|_, _| Ok(()));

    let svc = service(Role::Administrator, store);
    tokio_test::assert_ok!(svc.insert(&NewBook::new("Dune", "Herbert")).await);
}

#[tokio::test]
async fn execute_dispatches_to_the_matching_operation() {
    let books = vec![
        Book {
            id: 1,
            title: "Dune".into(),
            author: "Herbert".into(),
        },
        Book {
            id: 3,
            title: "Dune".into(),
            author: "Herbert2".into(),
        },
    ];

    let mut store = MockStore::new();
    {
        let books = books.clone();
        store
            .expect_find_by_title()
            .withf(|title| title == "Dune")
            .times(1)
            .returning(move |_| Ok(books.clone()));
    }
    store
        .expect_delete_by_title()
        .withf(|title| title == "1984")
        .times(1)
        .returning(|_| Ok(()));
    store.expect_clear_all().times(1).returning(|| Ok(()));
    store.expect_drop_database().times(1).returning(|| Ok(()));

    let svc = service(Role::Administrator, store);

    let output = svc
        .execute(Command::FindByTitle {
            title: "Dune".into(),
        })
        .await
        .unwrap();
    assert_eq!(output, CommandOutput::Books(books));

    let output = svc
        .execute(Command::DeleteByTitle {
            title: "1984".into(),
        })
        .await
        .unwrap();
    assert_eq!(output, CommandOutput::Done);

    assert_eq!(svc.execute(Command::ClearAll).await.unwrap(), CommandOutput::Done);
    assert_eq!(
        svc.execute(Command::DropDatabase).await.unwrap(),
        CommandOutput::Done
    );
}

#[tokio::test]
async fn store_failures_surface_as_database_errors() {
    let mut store = MockStore::new();
    store
        .expect_list_all()
        .times(1)
        .returning(|| Err(AppError::Database(sqlx::Error::PoolClosed)));

    let svc = service(Role::Administrator, store);
    let err = svc.list_all().await.unwrap_err();
    assert!(matches!(err, AppError::Database(_)));
}
