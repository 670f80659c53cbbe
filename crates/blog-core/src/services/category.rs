use std::sync::Arc;

use uuid::Uuid;

use super::or_not_found;
use crate::domain::{Category, CategoryDeletePolicy};
use crate::error::DomainError;
use crate::ports::CategoryRepository;

/// Category CRUD and name uniqueness.
#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
    delete_policy: CategoryDeletePolicy,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>, delete_policy: CategoryDeletePolicy) -> Self {
        Self {
            repo,
            delete_policy,
        }
    }

    pub fn delete_policy(&self) -> CategoryDeletePolicy {
        self.delete_policy
    }

    /// All categories, or only those whose name contains `name_filter`
    /// (ignoring case) when the filter is not blank.
    pub async fn list_all(&self, name_filter: Option<&str>) -> Result<Vec<Category>, DomainError> {
        let categories = match name_filter.map(str::trim).filter(|f| !f.is_empty()) {
            Some(fragment) => self.repo.find_by_name_containing(fragment).await?,
            None => self.repo.find_all().await?,
        };
        Ok(categories)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Category, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CategoryNotFound(id))
    }

    /// Create a category. Names are unique regardless of case.
    pub async fn create(&self, name: &str) -> Result<Category, DomainError> {
        let name = normalize_name(name)?;

        if self.repo.find_by_name_ignore_case(&name).await?.is_some() {
            return Err(DomainError::CategoryNameConflict(name));
        }

        let category = self.repo.insert(Category::new(name)).await?;
        tracing::info!(category_id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    /// Rename a category.
    ///
    /// Uniqueness is only enforced at creation time; a rename may produce a
    /// name that collides with another category.
    pub async fn rename(&self, id: Uuid, name: &str) -> Result<Category, DomainError> {
        let name = normalize_name(name)?;
        let mut category = self.get_by_id(id).await?;
        category.name = name;

        self.repo
            .update(category)
            .await
            .map_err(|e| or_not_found(e, DomainError::CategoryNotFound(id)))
    }

    /// Delete a category according to the configured [`CategoryDeletePolicy`].
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.get_by_id(id).await?;

        match self.delete_policy {
            CategoryDeletePolicy::Detach => {
                self.repo
                    .delete(id)
                    .await
                    .map_err(|e| or_not_found(e, DomainError::CategoryNotFound(id)))?;
            }
            CategoryDeletePolicy::Reject => {
                let posts = self.repo.count_posts(id).await?;
                if posts > 0 {
                    return Err(DomainError::CategoryInUse { id, posts });
                }
                self.repo
                    .delete(id)
                    .await
                    .map_err(|e| or_not_found(e, DomainError::CategoryNotFound(id)))?;
            }
            CategoryDeletePolicy::Cascade => {
                let removed = self
                    .repo
                    .delete_with_posts(id)
                    .await
                    .map_err(|e| or_not_found(e, DomainError::CategoryNotFound(id)))?;
                tracing::info!(category_id = %id, posts_removed = removed, "Cascaded category delete");
            }
        }

        tracing::info!(category_id = %id, policy = ?self.delete_policy, "Category deleted");
        Ok(())
    }
}

fn normalize_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::Validation(
            "Category name must not be blank".to_string(),
        ));
    }
    Ok(name.to_string())
}
