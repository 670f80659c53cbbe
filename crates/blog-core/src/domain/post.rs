use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a timestamped article filed under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub category_id: Uuid,
}

impl Post {
    /// Create a new post stamped with the current time.
    pub fn new(title: String, content: String, category_id: Uuid) -> Self {
        Self::with_created_at(title, content, category_id, Utc::now())
    }

    pub fn with_created_at(
        title: String,
        content: String,
        category_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_at,
            category_id,
        }
    }

    /// Apply a partial update. Absent fields are left untouched.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(category_id) = changes.category_id {
            self.category_id = category_id;
        }
    }
}

/// Input for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category_id: Uuid,
    /// Defaults to the time of creation.
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields to change on an existing post; `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<Uuid>,
}
