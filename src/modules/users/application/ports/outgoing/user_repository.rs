use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::users::application::domain::User;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub full_name: String,
    pub hashed_password: String,
    pub is_superuser: bool,
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub hashed_password: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email address is already registered")]
    EmailAlreadyExists,

    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, new_user: NewUser) -> Result<User, UserRepositoryError>;
    async fn update(&self, user_id: i32, changes: UserChanges) -> Result<User, UserRepositoryError>;
    /// Removes the user together with all of their lists and items in a
    /// single transaction.
    async fn delete(&self, user_id: i32) -> Result<(), UserRepositoryError>;
    async fn set_active(&self, user_id: i32, is_active: bool) -> Result<User, UserRepositoryError>;
    async fn record_login(
        &self,
        user_id: i32,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;
}
