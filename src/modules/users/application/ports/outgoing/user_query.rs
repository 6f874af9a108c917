use async_trait::async_trait;

use crate::users::application::domain::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of user persistence. Lookups by email expect the caller to
/// have normalized to lowercase already.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
    /// Page of users ordered by id ascending, plus the total count.
    async fn list(&self, skip: u64, limit: u64) -> Result<(Vec<User>, u64), UserQueryError>;
}
