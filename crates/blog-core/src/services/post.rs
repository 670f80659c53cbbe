use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use uuid::Uuid;

use super::{CategoryService, or_not_found};
use crate::domain::{NewPost, Post, PostChanges};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Post CRUD, filtering, and category reference checks.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    categories: CategoryService,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, categories: CategoryService) -> Self {
        Self { repo, categories }
    }

    /// All posts, newest first.
    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    /// Posts created on the given UTC calendar day, newest first.
    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Post>, DomainError> {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        // The last representable day has no successor; its window runs to the end of time.
        let end = match date.succ_opt() {
            Some(next) => next.and_time(NaiveTime::MIN).and_utc() - TimeDelta::nanoseconds(1),
            None => DateTime::<Utc>::MAX_UTC,
        };
        Ok(self.repo.find_created_between(start, end).await?)
    }

    /// Posts whose title or content contains `fragment`, ignoring case.
    pub async fn search_by_title_or_content(
        &self,
        fragment: &str,
    ) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.search_title_or_content(fragment).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))
    }

    /// Create a post under an existing category.
    pub async fn create(&self, new: NewPost) -> Result<Post, DomainError> {
        let category = self.categories.get_by_id(new.category_id).await?;

        let post = Post::with_created_at(
            new.title,
            new.content,
            category.id,
            new.created_at.unwrap_or_else(Utc::now),
        );
        let post = self.repo.insert(post).await?;

        tracing::info!(post_id = %post.id, category_id = %post.category_id, "Post created");
        Ok(post)
    }

    /// Apply the supplied fields to a post. A new category reference must exist.
    pub async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, DomainError> {
        let mut post = self.get_by_id(id).await?;

        if let Some(category_id) = changes.category_id {
            self.categories.get_by_id(category_id).await?;
        }
        post.apply(changes);

        self.repo
            .update(post)
            .await
            .map_err(|e| or_not_found(e, DomainError::PostNotFound(id)))
    }

    /// Posts filed under a category, newest first.
    pub async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<Post>, DomainError> {
        self.categories.get_by_id(category_id).await?;
        Ok(self.repo.find_by_category_id(category_id).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| or_not_found(e, DomainError::PostNotFound(id)))?;

        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }
}
