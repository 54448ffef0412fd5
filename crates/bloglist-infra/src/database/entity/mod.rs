//! SeaORM entities.

pub mod blog;
pub mod user;
pub mod user_blog;
