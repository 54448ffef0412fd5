//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/blogs` and `PUT /api/blogs/{id}`.
///
/// All fields are optional at the wire level; required-ness is checked by the domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// Public summary of a blog's owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
}

/// A blog as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user: Option<OwnerSummary>,
    pub created_at: String,
    pub updated_at: String,
}

/// Blog fields embedded in a user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// A user's public information. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub blogs: Vec<BlogSummary>,
}

/// Body of `POST /api/login`. Missing fields read as empty and simply fail to match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

/// Aggregates over every stored blog; each field is `null` when there are no blogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_likes: Option<i64>,
    pub favorite_blog: Option<FavoriteBlogStat>,
    pub most_blogs: Option<AuthorBlogsStat>,
    pub most_likes: Option<AuthorLikesStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteBlogStat {
    pub title: String,
    pub author: String,
    pub likes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorBlogsStat {
    pub author: String,
    pub blogs: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorLikesStat {
    pub author: String,
    pub likes: i64,
}
