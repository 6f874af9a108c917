use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::users::application::domain::User;

/// Public view of a user row. The password hash never leaves the
/// application layer.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDto {
    /// User ID
    #[schema(example = 1)]
    pub id: i32,

    /// Email address
    #[schema(example = "alice@example.com")]
    pub email: String,

    /// Full name
    #[schema(example = "Alice Example")]
    pub full_name: String,

    /// Whether the account can authenticate
    #[schema(example = true)]
    pub is_active: bool,

    /// Whether the account has superuser privileges
    #[schema(example = false)]
    pub is_superuser: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
            created_at: user.created_at,
            updated_at: user.updated_at,
            last_login: user.last_login,
        }
    }
}
