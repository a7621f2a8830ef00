//! Access policy tests

use libris::error::AppError;
use libris::models::role::{Operation, Role, ALL_OPERATIONS};
use libris::policy::AccessPolicy;

#[test]
fn administrator_may_perform_every_operation() {
    for op in ALL_OPERATIONS {
        assert!(
            AccessPolicy::authorize(Role::Administrator, op).is_ok(),
            "administrator denied '{}'",
            op
        );
    }
}

#[test]
fn guest_is_read_only() {
    assert!(AccessPolicy::authorize(Role::Guest, Operation::FindByTitle).is_ok());
    assert!(AccessPolicy::authorize(Role::Guest, Operation::ListAll).is_ok());

    for op in [
        Operation::Insert,
        Operation::DeleteByTitle,
        Operation::ClearAll,
        Operation::DropDatabase,
    ] {
        let err = AccessPolicy::authorize(Role::Guest, op).unwrap_err();
        assert!(
            matches!(err, AppError::Authorization(_)),
            "guest '{}' should fail with an authorization error, got {:?}",
            op,
            err
        );
    }
}

#[test]
fn denial_message_names_role_and_operation() {
    let err = AccessPolicy::authorize(Role::Guest, Operation::DropDatabase).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("guest"));
    assert!(message.contains("drop_database"));
}

#[test]
fn role_parses_from_session_strings() {
    assert_eq!("administrator".parse::<Role>().unwrap(), Role::Administrator);
    assert_eq!("admin".parse::<Role>().unwrap(), Role::Administrator);
    assert_eq!("Guest".parse::<Role>().unwrap(), Role::Guest);
    assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Administrator);
}

#[test]
fn unknown_role_string_is_rejected() {
    assert!("librarian".parse::<Role>().is_err());
    assert!("".parse::<Role>().is_err());
}
