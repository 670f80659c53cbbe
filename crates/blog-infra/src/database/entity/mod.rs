//! SeaORM entities mirroring the migration schema.

pub mod category;
pub mod post;
