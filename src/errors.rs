use std::path::PathBuf;

use strum::Display;
use thiserror::Error;

use crate::collection::Collection;
use crate::models::CompanyId;

pub type StoreResult<T> = Result<T, StoreError>;

/// Coarse classification of a [`StoreError`].
///
/// Callers branch on this instead of inspecting messages: an integrity
/// violation means the request itself was rejected, a storage failure means
/// the engine could not serve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Integrity,
    Storage,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Job references unknown company {company_id}")]
    UnknownCompany { company_id: CompanyId },

    #[error("Redb General Error: {0}")]
    RedbError(#[from] redb::Error),

    #[error("Redb Transaction Error: {0}")]
    RedbTransactionError(#[from] redb::TransactionError),

    #[error("Redb Storage Error: {0}")]
    RedbStorageError(#[from] redb::StorageError),

    #[error("Redb Database Error: {0}")]
    RedbDatabaseError(#[from] redb::DatabaseError),

    #[error("Redb Table Error: {0}")]
    RedbTableError(#[from] redb::TableError),

    #[error("Redb Commit Error: {0}")]
    RedbCommitError(#[from] redb::CommitError),

    #[error("Encode Error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Decode Error: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema Version Mismatch: requested {requested}, stored {stored}")]
    SchemaVersionMismatch { requested: u32, stored: u32 },

    #[error("Schema Conflict: {0}")]
    SchemaConflict(String),

    #[error("Store Not Found: {}", .0.display())]
    StoreNotFound(PathBuf),

    #[error("Collection {0} is outside the transaction scope")]
    OutOfScope(Collection),

    #[error("Duplicate identifier {id} in {collection}")]
    DuplicateId { collection: Collection, id: String },
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::UnknownCompany { .. } => ErrorKind::Integrity,
            _ => ErrorKind::Storage,
        }
    }

    pub fn is_integrity_violation(&self) -> bool {
        self.kind() == ErrorKind::Integrity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_company_is_an_integrity_violation() {
        let err = StoreError::UnknownCompany {
            company_id: CompanyId::from("missing"),
        };
        assert_eq!(err.kind(), ErrorKind::Integrity);
        assert!(err.is_integrity_violation());
        assert_eq!(err.to_string(), "Job references unknown company missing");
    }

    #[test]
    fn engine_failures_are_storage_errors() {
        let err = StoreError::SchemaVersionMismatch {
            requested: 1,
            stored: 2,
        };
        assert_eq!(err.kind(), ErrorKind::Storage);

        let err = StoreError::OutOfScope(Collection::Jobs);
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert_eq!(
            err.to_string(),
            "Collection jobs is outside the transaction scope"
        );
    }

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::Integrity.to_string(), "integrity");
        assert_eq!(ErrorKind::Storage.to_string(), "storage");
    }
}
