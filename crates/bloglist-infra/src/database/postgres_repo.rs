//! PostgreSQL repository implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use bloglist_core::domain::{Blog, User};
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BaseRepository, BlogRepository, UserRepository};

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::entity::user_blog::{self, Entity as UserBlogEntity};
use super::postgres_base::{PostgresBaseRepository, read_error, write_error};

/// PostgreSQL blog repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Blog>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut found: HashMap<Uuid, Blog> = BlogEntity::find()
            .filter(blog::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(read_error)?
            .into_iter()
            .map(|model| (model.id, Blog::from(model)))
            .collect();

        Ok(ids.iter().filter_map(|id| found.remove(id)).collect())
    }
}

/// PostgreSQL user repository.
///
/// User rows go through the generic base; the blog list is kept in `user_blogs`.
pub struct PostgresUserRepository {
    base: PostgresBaseRepository<UserEntity>,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self {
            base: PostgresBaseRepository::new(db),
        }
    }

    async fn blog_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, RepoError> {
        let links = UserBlogEntity::find()
            .filter(user_blog::Column::UserId.eq(user_id))
            .order_by_asc(user_blog::Column::CreatedAt)
            .all(&self.base.db)
            .await
            .map_err(read_error)?;

        Ok(links.into_iter().map(|link| link.blog_id).collect())
    }

    async fn with_blogs(&self, user: Option<User>) -> Result<Option<User>, RepoError> {
        match user {
            Some(mut user) => {
                user.blogs = self.blog_ids(user.id).await?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for PostgresUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let user =
            <PostgresBaseRepository<UserEntity> as BaseRepository<User, Uuid>>::find_by_id(
                &self.base, id,
            )
            .await?;
        self.with_blogs(user).await
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let users: Vec<User> =
            <PostgresBaseRepository<UserEntity> as BaseRepository<User, Uuid>>::find_all(
                &self.base,
            )
            .await?;

        let links = UserBlogEntity::find()
            .order_by_asc(user_blog::Column::CreatedAt)
            .all(&self.base.db)
            .await
            .map_err(read_error)?;

        let mut by_user: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for link in links {
            by_user.entry(link.user_id).or_default().push(link.blog_id);
        }

        let mut users: Vec<User> = users
            .into_iter()
            .map(|mut user| {
                user.blogs = by_user.remove(&user.id).unwrap_or_default();
                user
            })
            .collect();
        users.sort_by_key(|user| user.created_at);

        Ok(users)
    }

    async fn insert(&self, entity: User) -> Result<User, RepoError> {
        let blogs = entity.blogs.clone();
        let mut user =
            <PostgresBaseRepository<UserEntity> as BaseRepository<User, Uuid>>::insert(
                &self.base, entity,
            )
            .await?;

        for blog_id in &blogs {
            self.attach_blog(user.id, *blog_id).await?;
        }
        user.blogs = blogs;

        Ok(user)
    }

    async fn update(&self, entity: User) -> Result<User, RepoError> {
        let mut user =
            <PostgresBaseRepository<UserEntity> as BaseRepository<User, Uuid>>::update(
                &self.base, entity,
            )
            .await?;
        user.blogs = self.blog_ids(user.id).await?;

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        <PostgresBaseRepository<UserEntity> as BaseRepository<User, Uuid>>::delete(
            &self.base, id,
        )
        .await
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(username = %username, "Finding user by username");

        let user = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.base.db)
            .await
            .map_err(read_error)?;

        self.with_blogs(user.map(Into::into)).await
    }

    async fn attach_blog(&self, user_id: Uuid, blog_id: Uuid) -> Result<(), RepoError> {
        user_blog::ActiveModel {
            user_id: Set(user_id),
            blog_id: Set(blog_id),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.base.db)
        .await
        .map_err(write_error)?;

        Ok(())
    }

    async fn detach_blog(&self, user_id: Uuid, blog_id: Uuid) -> Result<(), RepoError> {
        UserBlogEntity::delete_many()
            .filter(user_blog::Column::UserId.eq(user_id))
            .filter(user_blog::Column::BlogId.eq(blog_id))
            .exec(&self.base.db)
            .await
            .map_err(write_error)?;

        Ok(())
    }
}
