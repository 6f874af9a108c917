use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::{authorize, Action, Principal};
use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PolicyViolation,
};
use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::users::application::domain::User;
use crate::users::application::ports::outgoing::{
    UserChanges, UserQuery, UserRepository, UserRepositoryError,
};

/// Fields a caller may change. `None` means "leave as is".
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub enum UpdateUserError {
    NotFound,
    AccessDenied,
    SuperuserRequired,
    InvalidEmail,
    WeakPassword(Vec<PolicyViolation>),
    EmailAlreadyExists,
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for UpdateUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateUserError::NotFound => write!(f, "User not found"),
            UpdateUserError::AccessDenied => write!(f, "Not allowed to update this user"),
            UpdateUserError::SuperuserRequired => {
                write!(f, "Only a superuser may make this status change")
            }
            UpdateUserError::InvalidEmail => write!(f, "Invalid email format"),
            UpdateUserError::WeakPassword(violations) => {
                let msgs: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", msgs.join("; "))
            }
            UpdateUserError::EmailAlreadyExists => {
                write!(f, "Email address is already registered")
            }
            UpdateUserError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            UpdateUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateUserError {}

#[async_trait]
pub trait IUpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        user_id: i32,
        request: UpdateUserRequest,
    ) -> Result<User, UpdateUserError>;
}

pub struct UpdateUserUseCase {
    query: Arc<dyn UserQuery>,
    repository: Arc<dyn UserRepository>,
    password_policy: Arc<dyn PasswordPolicy>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl UpdateUserUseCase {
    pub fn new(
        query: Arc<dyn UserQuery>,
        repository: Arc<dyn UserRepository>,
        password_policy: Arc<dyn PasswordPolicy>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            query,
            repository,
            password_policy,
            password_hasher,
        }
    }
}

#[async_trait]
impl IUpdateUserUseCase for UpdateUserUseCase {
    async fn execute(
        &self,
        principal: &Principal,
        user_id: i32,
        request: UpdateUserRequest,
    ) -> Result<User, UpdateUserError> {
        authorize(principal, Action::Update, user_id)
            .map_err(|_| UpdateUserError::AccessDenied)?;

        // A user may switch off their own account; reactivation and
        // changing anyone else's status stay administrative.
        if let Some(active) = request.is_active {
            let self_deactivation = principal.user_id == user_id && !active;
            if !principal.is_superuser && !self_deactivation {
                return Err(UpdateUserError::SuperuserRequired);
            }
        }

        let mut changes = UserChanges::default();

        if let Some(email) = request.email {
            let email = email.trim().to_lowercase();
            if !EmailAddress::is_valid(&email) {
                return Err(UpdateUserError::InvalidEmail);
            }

            match self.query.find_by_email(&email).await {
                Ok(Some(existing)) if existing.id != user_id => {
                    return Err(UpdateUserError::EmailAlreadyExists);
                }
                Ok(_) => {}
                Err(e) => return Err(UpdateUserError::RepositoryError(e.to_string())),
            }

            changes.email = Some(email);
        }

        if let Some(full_name) = request.full_name {
            changes.full_name = Some(full_name.trim().to_string());
        }

        if let Some(password) = request.password {
            self.password_policy
                .validate(&password)
                .map_err(UpdateUserError::WeakPassword)?;

            let hashed = self
                .password_hasher
                .hash_password(&password)
                .await
                .map_err(|e| UpdateUserError::HashingFailed(e.to_string()))?;
            changes.hashed_password = Some(hashed);
        }

        changes.is_active = request.is_active;

        match self.repository.update(user_id, changes).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "user updated");
                Ok(user)
            }
            Err(UserRepositoryError::NotFound) => Err(UpdateUserError::NotFound),
            Err(UserRepositoryError::EmailAlreadyExists) => {
                Err(UpdateUserError::EmailAlreadyExists)
            }
            Err(e) => Err(UpdateUserError::RepositoryError(e.to_string())),
        }
    }
}
