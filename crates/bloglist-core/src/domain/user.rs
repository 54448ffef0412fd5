use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Minimum length for both usernames and passwords.
pub const MIN_CREDENTIAL_LEN: usize = 3;

/// User entity - represents a registered blog list user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Ids of the blogs this user created, oldest first.
    pub blogs: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(username: String, name: Option<String>, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            name,
            password_hash,
            blogs: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Check registration input, returning the username and password on success.
pub fn validate_registration<'a>(
    username: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<(&'a str, &'a str), DomainError> {
    let (Some(username), Some(password)) = (
        username.filter(|u| !u.is_empty()),
        password.filter(|p| !p.is_empty()),
    ) else {
        return Err(DomainError::Validation(
            "Username and password are required".to_string(),
        ));
    };

    if username.chars().count() < MIN_CREDENTIAL_LEN {
        return Err(DomainError::Validation(format!(
            "Username must be at least {MIN_CREDENTIAL_LEN} characters long"
        )));
    }
    if password.chars().count() < MIN_CREDENTIAL_LEN {
        return Err(DomainError::Validation(format!(
            "Password must be at least {MIN_CREDENTIAL_LEN} characters long"
        )));
    }

    Ok((username, password))
}
