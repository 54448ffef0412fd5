//! Login handler.

use actix_web::{HttpResponse, web};

use bloglist_core::ports::AuthError;
use bloglist_shared::dto::{LoginRequest, LoginResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/login
///
/// Unknown users and wrong passwords get the same response.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let LoginRequest { username, password } = body.into_inner();

    let user = state.users.find_by_username(&username).await?;

    let valid = match &user {
        Some(user) => {
            let passwords = state.passwords.clone();
            let hash = user.password_hash.clone();
            web::block(move || passwords.verify(&password, &hash))
                .await
                .map_err(|e| AppError::Internal(e.to_string()))??
        }
        None => false,
    };

    let Some(user) = user.filter(|_| valid) else {
        tracing::info!(username = %username, "Failed login attempt");
        return Err(AuthError::InvalidCredentials.into());
    };

    let token = state
        .tokens
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
