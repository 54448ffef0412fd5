//! User handlers.

use actix_web::{HttpResponse, web};

use bloglist_core::domain::{Blog, User, validate_registration};
use bloglist_core::{DomainError, RepoError};
use bloglist_shared::dto::{BlogSummary, RegisterUserRequest, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn user_response(user: User, blogs: Vec<Blog>) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        username: user.username,
        name: user.name,
        blogs: blogs
            .into_iter()
            .map(|blog| BlogSummary {
                id: blog.id.to_string(),
                title: blog.title,
                author: blog.author,
                url: blog.url,
                likes: blog.likes,
            })
            .collect(),
    }
}

/// GET /api/users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;

    let mut body = Vec::with_capacity(users.len());
    for user in users {
        let blogs = state.blogs.find_by_ids(&user.blogs).await?;
        body.push(user_response(user, blogs));
    }

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/users
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let (username, password) =
        validate_registration(req.username.as_deref(), req.password.as_deref())?;

    // Argon2 is CPU-bound; keep it off the async workers.
    let passwords = state.passwords.clone();
    let password = password.to_string();
    let password_hash = web::block(move || passwords.hash(&password))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let user = User::new(username.to_string(), req.name, password_hash);
    let saved = state.users.insert(user).await.map_err(|e| match e {
        RepoError::Constraint(_) => AppError::from(DomainError::Duplicate("username")),
        other => other.into(),
    })?;

    tracing::info!(user_id = %saved.id, username = %saved.username, "User registered");

    Ok(HttpResponse::Created().json(user_response(saved, Vec::new())))
}
