use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category entity - a uniquely named grouping of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

impl Category {
    /// Create a new category with a generated ID.
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}

/// What happens to a category's posts when the category is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryDeletePolicy {
    /// Delete the category and leave its posts pointing at the old id.
    #[default]
    Detach,
    /// Refuse to delete while posts still reference the category.
    Reject,
    /// Delete the category together with all of its posts.
    Cascade,
}

impl FromStr for CategoryDeletePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detach" => Ok(Self::Detach),
            "reject" => Ok(Self::Reject),
            "cascade" => Ok(Self::Cascade),
            other => Err(format!("unknown category delete policy '{other}'")),
        }
    }
}
