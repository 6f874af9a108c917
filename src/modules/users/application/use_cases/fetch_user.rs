use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::{authorize, Action, Principal};
use crate::users::application::domain::User;
use crate::users::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone)]
pub enum FetchUserError {
    NotFound,
    AccessDenied,
    QueryError(String),
}

impl std::fmt::Display for FetchUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchUserError::NotFound => write!(f, "User not found"),
            FetchUserError::AccessDenied => write!(f, "Not allowed to view this user"),
            FetchUserError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for FetchUserError {}

#[async_trait]
pub trait IFetchUserUseCase: Send + Sync {
    async fn execute(&self, principal: &Principal, user_id: i32) -> Result<User, FetchUserError>;
}

pub struct FetchUserUseCase {
    query: Arc<dyn UserQuery>,
}

impl FetchUserUseCase {
    pub fn new(query: Arc<dyn UserQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IFetchUserUseCase for FetchUserUseCase {
    async fn execute(&self, principal: &Principal, user_id: i32) -> Result<User, FetchUserError> {
        // A user profile is owned by the user it describes.
        authorize(principal, Action::Read, user_id).map_err(|_| FetchUserError::AccessDenied)?;

        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchUserError::QueryError(e.to_string()))?
            .ok_or(FetchUserError::NotFound)
    }
}
