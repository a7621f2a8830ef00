//! Static role-to-operation permission table

use crate::error::{AppError, AppResult};
use crate::models::role::{Operation, Role};

/// Access policy consulted before any repository call
///
/// The table is static: administrators may run every operation, guests are
/// read-only. There are no per-resource rules and no runtime changes.
pub struct AccessPolicy;

impl AccessPolicy {
    /// Whether `role` may invoke `operation`
    pub fn allows(role: Role, operation: Operation) -> bool {
        match role {
            Role::Administrator => true,
            Role::Guest => matches!(operation, Operation::FindByTitle | Operation::ListAll),
        }
    }

    /// Fail-closed check; a denial must reach the caller before any
    /// database interaction happens
    pub fn authorize(role: Role, operation: Operation) -> AppResult<()> {
        if Self::allows(role, operation) {
            Ok(())
        } else {
            Err(AppError::Authorization(format!(
                "Role '{}' is not allowed to perform '{}'",
                role, operation
            )))
        }
    }
}
