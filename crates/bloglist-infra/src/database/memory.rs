//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Records keep insertion order. Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bloglist_core::domain::{Blog, User};
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BaseRepository, BlogRepository, UserRepository};

/// In-memory blog store.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    store: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|b| b.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn insert(&self, entity: Blog) -> Result<Blog, RepoError> {
        let mut store = self.store.write().await;
        if store.iter().any(|b| b.id == entity.id) {
            return Err(RepoError::Constraint(format!("blog {} already exists", entity.id)));
        }
        store.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Blog) -> Result<Blog, RepoError> {
        let mut store = self.store.write().await;
        let slot = store
            .iter_mut()
            .find(|b| b.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|b| b.id != id);
        if store.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Blog>, RepoError> {
        let store = self.store.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| store.iter().find(|b| b.id == *id).cloned())
            .collect())
    }
}

/// In-memory user store. Enforces unique usernames like the database index does.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn insert(&self, entity: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        if store.iter().any(|u| u.username == entity.username) {
            return Err(RepoError::Constraint(format!(
                "duplicate username {}",
                entity.username
            )));
        }
        store.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        if store
            .iter()
            .any(|u| u.username == entity.username && u.id != entity.id)
        {
            return Err(RepoError::Constraint(format!(
                "duplicate username {}",
                entity.username
            )));
        }
        let slot = store
            .iter_mut()
            .find(|u| u.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|u| u.id != id);
        if store.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|u| u.username == username).cloned())
    }

    async fn attach_blog(&self, user_id: Uuid, blog_id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let user = store
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(RepoError::NotFound)?;
        if !user.blogs.contains(&blog_id) {
            user.blogs.push(blog_id);
        }
        Ok(())
    }

    async fn detach_blog(&self, user_id: Uuid, blog_id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let user = store
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(RepoError::NotFound)?;
        user.blogs.retain(|id| *id != blog_id);
        Ok(())
    }
}
