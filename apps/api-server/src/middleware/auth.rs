//! Authentication extractors.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;
use std::future::{Ready, ready};

use bloglist_core::domain::User;
use bloglist_core::ports::{AuthError, TokenClaims};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Identity decoded from a verified bearer token.
///
/// Use this in handlers to require a valid token:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: uuid::Uuid,
    pub username: String,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
        }
    }
}

/// Token from an `Authorization: Bearer <token>` header.
///
/// Any other scheme, or no header at all, counts as a missing token.
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}

fn app_state(req: &HttpRequest) -> Result<&web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        tracing::error!("AppState not found in app data");
        AppError::Internal("Server configuration error".to_string())
    })
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = app_state(req).and_then(|state| {
            let token = bearer_token(req).ok_or(AuthError::MissingToken)?;
            let claims = state.tokens.validate_token(token)?;
            Ok(Identity::from(claims))
        });

        ready(result)
    }
}

/// The stored user behind a verified token.
///
/// Rejects tokens whose user no longer exists with `user not found`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = Identity::from_request(req, payload).into_inner();
        let state = app_state(req).cloned();

        Box::pin(async move {
            let identity = identity?;
            let state = state?;

            let user = state
                .users
                .find_by_id(identity.user_id)
                .await?
                .ok_or_else(|| AppError::Unauthorized("user not found".to_string()))?;
            tracing::debug!(username = %identity.username, "Authenticated request");

            Ok(AuthenticatedUser(user))
        })
    }
}
