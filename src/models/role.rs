//! Access roles and the operations they are checked against

use serde::{Deserialize, Serialize};

/// Session role, fixed when the service is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrator,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Guest => "guest",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "administrator" | "admin" => Ok(Role::Administrator),
            "guest" => Ok(Role::Guest),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Catalog operations subject to authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Insert,
    FindByTitle,
    DeleteByTitle,
    ListAll,
    ClearAll,
    DropDatabase,
}

/// All operations, in table order
pub const ALL_OPERATIONS: [Operation; 6] = [
    Operation::Insert,
    Operation::FindByTitle,
    Operation::DeleteByTitle,
    Operation::ListAll,
    Operation::ClearAll,
    Operation::DropDatabase,
];

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::FindByTitle => "find_by_title",
            Operation::DeleteByTitle => "delete_by_title",
            Operation::ListAll => "list_all",
            Operation::ClearAll => "clear_all",
            Operation::DropDatabase => "drop_database",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
