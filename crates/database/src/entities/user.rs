//! User entity definitions

use serde::{Deserialize, Serialize};

/// User entity representing a user in the system.
///
/// Immutable from this layer's perspective except for the free-text
/// presence `status` ("online", "offline", "away", ...), which a
/// collaborator outside this system maintains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub status: String,
    pub created_at: String,
}
