//! Domain entities - the core business objects.

mod category;
mod post;

pub use category::{Category, CategoryDeletePolicy};
pub use post::{NewPost, Post, PostChanges};
