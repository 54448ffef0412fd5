//! Authentication ports.

use uuid::Uuid;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub username: String,
    /// Expiry as a unix timestamp; `None` for tokens that never expire.
    pub exp: Option<i64>,
}

/// Token service trait for issuing and verifying signed tokens.
pub trait TokenService: Send + Sync {
    /// Issue a token identifying `user_id`/`username`.
    fn generate_token(&self, user_id: Uuid, username: &str) -> Result<String, AuthError>;

    /// Verify the signature and decode the claims.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("token expired")]
    TokenExpired,

    #[error("token invalid: {0}")]
    InvalidToken(String),

    #[error("token missing")]
    MissingToken,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
