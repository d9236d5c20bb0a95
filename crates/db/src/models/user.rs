//! User entity model and DTOs.

use serde::Serialize;
use songmap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub disabled: bool,
    pub approval_ratio: i32,
    pub influence: i32,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub disabled: bool,
    pub approval_ratio: i32,
    pub influence: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            disabled: user.disabled,
            approval_ratio: user.approval_ratio,
            influence: user.influence,
        }
    }
}

/// Insert DTO. The password arrives here already hashed; the plaintext never
/// crosses the crate boundary.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
