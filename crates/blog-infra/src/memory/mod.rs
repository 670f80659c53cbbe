//! In-memory store implementation.

mod store;

pub use store::InMemoryBlogStore;
