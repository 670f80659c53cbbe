use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Category, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity. Fails with `RepoError::NotFound` if absent.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` if absent.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Category repository.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, Uuid> {
    /// All categories, ordered by name.
    async fn find_all(&self) -> Result<Vec<Category>, RepoError>;

    /// Categories whose name contains `fragment`, ignoring case.
    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Category>, RepoError>;

    /// The category whose name equals `name`, ignoring case.
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Category>, RepoError>;

    /// Number of posts referencing the category.
    async fn count_posts(&self, id: Uuid) -> Result<u64, RepoError>;

    /// Delete the category and every post referencing it atomically.
    /// Returns how many posts were removed.
    async fn delete_with_posts(&self, id: Uuid) -> Result<u64, RepoError>;
}

/// Post repository. Every listing is ordered newest first.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Posts created within `[start, end]`, both bounds inclusive.
    async fn find_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError>;

    /// Posts whose title or content contains `fragment`, ignoring case.
    async fn search_title_or_content(&self, fragment: &str) -> Result<Vec<Post>, RepoError>;

    async fn find_by_category_id(&self, category_id: Uuid) -> Result<Vec<Post>, RepoError>;
}
