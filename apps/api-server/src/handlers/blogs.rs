//! Blog handlers.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use bloglist_core::domain::{Blog, BlogChanges, BlogDraft, User};
use bloglist_core::{DomainError, RepoError};
use bloglist_shared::dto::{BlogRequest, BlogResponse, OwnerSummary};

use super::parse_id;
use crate::middleware::auth::AuthenticatedUser;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn blog_response(blog: Blog, owner: Option<&User>) -> BlogResponse {
    BlogResponse {
        id: blog.id.to_string(),
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
        user: owner.map(|user| OwnerSummary {
            id: user.id.to_string(),
            username: user.username.clone(),
            name: user.name.clone(),
        }),
        created_at: blog.created_at.to_rfc3339(),
        updated_at: blog.updated_at.to_rfc3339(),
    }
}

fn not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "blog",
        id,
    }
    .into()
}

async fn find_blog(state: &AppState, id: Uuid) -> AppResult<Blog> {
    state.blogs.find_by_id(id).await?.ok_or_else(|| not_found(id))
}

async fn owner_of(state: &AppState, blog: &Blog) -> AppResult<Option<User>> {
    match blog.user_id {
        Some(user_id) => Ok(state.users.find_by_id(user_id).await?),
        None => Ok(None),
    }
}

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let mut blogs = state.blogs.find_all().await?;
    blogs.sort_by_key(|blog| blog.created_at);

    let mut owners: HashMap<Uuid, User> = HashMap::new();
    for user_id in blogs.iter().filter_map(|blog| blog.user_id) {
        if owners.contains_key(&user_id) {
            continue;
        }
        if let Some(user) = state.users.find_by_id(user_id).await? {
            owners.insert(user_id, user);
        }
    }

    let body: Vec<BlogResponse> = blogs
        .into_iter()
        .map(|blog| {
            let owner = blog.user_id.and_then(|id| owners.get(&id));
            blog_response(blog, owner)
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/blogs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let blog = find_blog(&state, id).await?;
    let owner = owner_of(&state, &blog).await?;

    Ok(HttpResponse::Ok().json(blog_response(blog, owner.as_ref())))
}

/// POST /api/blogs - Protected route
pub async fn create(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<BlogRequest>,
) -> AppResult<HttpResponse> {
    let AuthenticatedUser(user) = user;
    let req = body.into_inner();

    let blog = BlogDraft {
        title: req.title,
        author: req.author,
        url: req.url,
        likes: req.likes,
    }
    .into_blog(user.id)?;

    let saved = state.blogs.insert(blog).await?;

    // Second, independent write; the blog stays even if this fails.
    if let Err(e) = state.users.attach_blog(user.id, saved.id).await {
        tracing::warn!(
            error = %e,
            blog_id = %saved.id,
            user_id = %user.id,
            "Blog saved but not added to the user's blog list"
        );
    }

    tracing::info!(blog_id = %saved.id, user = %user.username, "Blog created");

    Ok(HttpResponse::Created().json(blog_response(saved, Some(&user))))
}

/// PUT /api/blogs/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BlogRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();
    let mut blog = find_blog(&state, id).await?;

    BlogChanges {
        title: req.title,
        author: req.author,
        url: req.url,
        likes: req.likes,
    }
    .apply(&mut blog)?;

    let updated = state.blogs.update(blog).await.map_err(|e| match e {
        RepoError::NotFound => not_found(id),
        other => other.into(),
    })?;
    let owner = owner_of(&state, &updated).await?;

    Ok(HttpResponse::Ok().json(blog_response(updated, owner.as_ref())))
}

/// DELETE /api/blogs/{id} - Protected route, owner only
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
    user: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let AuthenticatedUser(user) = user;
    let id = parse_id(&path)?;
    let blog = find_blog(&state, id).await?;

    if !blog.is_owned_by(user.id) {
        tracing::warn!(blog_id = %id, user = %user.username, "Refused to delete another user's blog");
        return Err(DomainError::NotOwner("delete a blog").into());
    }

    state.blogs.delete(id).await.map_err(|e| match e {
        RepoError::NotFound => not_found(id),
        other => other.into(),
    })?;

    if let Err(e) = state.users.detach_blog(user.id, id).await {
        tracing::warn!(
            error = %e,
            blog_id = %id,
            user_id = %user.id,
            "Blog deleted but still listed on the user"
        );
    }

    tracing::info!(blog_id = %id, user = %user.username, "Blog deleted");

    Ok(HttpResponse::NoContent().finish())
}
