use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::Principal;
use crate::users::application::domain::User;
use crate::users::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone)]
pub enum SetUserActiveError {
    NotFound,
    SuperuserRequired,
    RepositoryError(String),
}

impl std::fmt::Display for SetUserActiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetUserActiveError::NotFound => write!(f, "User not found"),
            SetUserActiveError::SuperuserRequired => {
                write!(f, "Only a superuser may make this status change")
            }
            SetUserActiveError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for SetUserActiveError {}

#[async_trait]
pub trait ISetUserActiveUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        user_id: i32,
        is_active: bool,
    ) -> Result<User, SetUserActiveError>;
}

pub struct SetUserActiveUseCase {
    repository: Arc<dyn UserRepository>,
}

impl SetUserActiveUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ISetUserActiveUseCase for SetUserActiveUseCase {
    /// Idempotent: activating an already active account (or deactivating
    /// an inactive one) succeeds and returns the current row.
    ///
    /// A user may switch off their own account; reactivation stays
    /// superuser-only since an inactive user cannot authenticate.
    async fn execute(
        &self,
        principal: &Principal,
        user_id: i32,
        is_active: bool,
    ) -> Result<User, SetUserActiveError> {
        let self_deactivation = principal.user_id == user_id && !is_active;
        if !principal.is_superuser && !self_deactivation {
            return Err(SetUserActiveError::SuperuserRequired);
        }

        match self.repository.set_active(user_id, is_active).await {
            Ok(user) => {
                tracing::info!(user_id, is_active, "account status changed");
                Ok(user)
            }
            Err(UserRepositoryError::NotFound) => Err(SetUserActiveError::NotFound),
            Err(e) => Err(SetUserActiveError::RepositoryError(e.to_string())),
        }
    }
}
