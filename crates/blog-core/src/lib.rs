//! # Blog Core
//!
//! The domain layer of the blog backend.
//! This crate contains the entities, the repository ports, and the
//! services that enforce the business rules. It performs no I/O itself.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, ErrorKind};
pub use services::{CategoryService, PostService};
