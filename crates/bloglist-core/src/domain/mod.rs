//! Domain entities - the core business objects.

mod blog;
mod user;

pub use blog::{Blog, BlogChanges, BlogDraft};
pub use user::{MIN_CREDENTIAL_LEN, User, validate_registration};
