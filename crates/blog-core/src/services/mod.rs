//! Application services - business rules on top of the repository ports.

mod category;
mod post;

pub use category::CategoryService;
pub use post::PostService;

use crate::error::{DomainError, RepoError};

/// Turn a repository miss into the domain's not-found error for that entity.
fn or_not_found(err: RepoError, not_found: DomainError) -> DomainError {
    match err {
        RepoError::NotFound => not_found,
        other => other.into(),
    }
}
