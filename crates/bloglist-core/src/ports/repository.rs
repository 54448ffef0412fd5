use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Blog, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Load every entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity. Fails with `NotFound` if it does not exist.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog repository.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// Fetch the blogs with the given ids, in the order of `ids`. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Blog>, RepoError>;
}

/// User repository with domain-specific methods.
///
/// A user's `blogs` list is stored separately from the blog records, so
/// `attach_blog`/`detach_blog` are independent writes.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Append `blog_id` to the user's blog list.
    async fn attach_blog(&self, user_id: Uuid, blog_id: Uuid) -> Result<(), RepoError>;

    /// Remove `blog_id` from the user's blog list.
    async fn detach_blog(&self, user_id: Uuid, blog_id: Uuid) -> Result<(), RepoError>;
}
