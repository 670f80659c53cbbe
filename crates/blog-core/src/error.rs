//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business rule failures raised by the services.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Category not found with id: {0}")]
    CategoryNotFound(Uuid),

    #[error("Post not found with id: {0}")]
    PostNotFound(Uuid),

    #[error("Category with name '{0}' already exists")]
    CategoryNameConflict(String),

    #[error("Category {id} is still referenced by {posts} post(s)")]
    CategoryInUse { id: Uuid, posts: u64 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// Coarse failure classes the transport layer dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Invalid,
    Unexpected,
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::CategoryNotFound(_) | DomainError::PostNotFound(_) => ErrorKind::NotFound,
            DomainError::CategoryNameConflict(_) | DomainError::CategoryInUse { .. } => {
                ErrorKind::Conflict
            }
            DomainError::Validation(_) => ErrorKind::Invalid,
            DomainError::Repository(RepoError::Constraint(_)) => ErrorKind::Conflict,
            DomainError::Repository(_) => ErrorKind::Unexpected,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
