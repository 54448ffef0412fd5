use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Blog entity - a link to an article with its author and like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    /// Owning user. Records created through the API always carry one.
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog with generated ID and timestamps.
    pub fn new(
        title: String,
        author: String,
        url: String,
        likes: i64,
        user_id: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            author,
            url,
            likes,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` owns this blog. Ownerless blogs belong to nobody.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == Some(user_id)
    }
}

/// Unvalidated input for creating a blog.
#[derive(Debug, Clone, Default)]
pub struct BlogDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl BlogDraft {
    /// Validate the draft and turn it into a blog owned by `owner`.
    ///
    /// Title, author and url must be present and non-blank; likes default to 0
    /// and may not be negative.
    pub fn into_blog(self, owner: Uuid) -> Result<Blog, DomainError> {
        check_likes(self.likes)?;
        match (
            non_blank(self.title),
            non_blank(self.author),
            non_blank(self.url),
        ) {
            (Some(title), Some(author), Some(url)) => Ok(Blog::new(
                title,
                author,
                url,
                self.likes.unwrap_or(0),
                Some(owner),
            )),
            _ => Err(DomainError::Validation(
                "Title, author, and URL are required".to_string(),
            )),
        }
    }
}

/// Partial replacement of a blog's mutable fields.
///
/// Absent fields are left untouched; present required fields must be non-blank.
#[derive(Debug, Clone, Default)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl BlogChanges {
    pub fn apply(self, blog: &mut Blog) -> Result<(), DomainError> {
        for (field, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("url", &self.url),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(DomainError::Validation(format!(
                    "`{field}` must not be empty"
                )));
            }
        }
        check_likes(self.likes)?;

        if let Some(title) = self.title {
            blog.title = title;
        }
        if let Some(author) = self.author {
            blog.author = author;
        }
        if let Some(url) = self.url {
            blog.url = url;
        }
        if let Some(likes) = self.likes {
            blog.likes = likes;
        }
        blog.updated_at = Utc::now();

        Ok(())
    }
}

fn check_likes(likes: Option<i64>) -> Result<(), DomainError> {
    match likes {
        Some(likes) if likes < 0 => Err(DomainError::Validation(
            "`likes` must not be negative".to_string(),
        )),
        _ => Ok(()),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
