//! # Blog Shared
//!
//! Wire-level types shared between the server and API clients.

pub mod dto;

pub use dto::{
    CategoryDto, CategoryQuery, CategoryRequest, CreatePostRequest, PatchPostRequest, PostDto,
    PostQuery, UpdatePostRequest,
};
