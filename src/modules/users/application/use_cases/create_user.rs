use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PolicyViolation,
};
use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::users::application::domain::User;
use crate::users::application::ports::outgoing::{
    NewUser, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum CreateUserError {
    InvalidEmail,
    WeakPassword(Vec<PolicyViolation>),
    EmailAlreadyExists,
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for CreateUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateUserError::InvalidEmail => write!(f, "Invalid email format"),
            CreateUserError::WeakPassword(violations) => {
                let msgs: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", msgs.join("; "))
            }
            CreateUserError::EmailAlreadyExists => {
                write!(f, "Email address is already registered")
            }
            CreateUserError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            CreateUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreateUserError {}

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        email: String,
        full_name: String,
        password: String,
    ) -> Result<User, CreateUserError>;
}

pub struct CreateUserUseCase {
    query: Arc<dyn UserQuery>,
    repository: Arc<dyn UserRepository>,
    password_policy: Arc<dyn PasswordPolicy>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl CreateUserUseCase {
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
impl ICreateUserUseCase for CreateUserUseCase {
    async fn execute(
        &self,
        email: String,
        full_name: String,
        password: String,
    ) -> Result<User, CreateUserError> {
        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(CreateUserError::InvalidEmail);
        }

        self.password_policy
            .validate(&password)
            .map_err(CreateUserError::WeakPassword)?;

        // Pre-check so the common duplicate path gets a clean error without
        // touching the unique index. The index still backs this up under
        // concurrent registration.
        match self.query.find_by_email(&email).await {
            Ok(Some(_)) => return Err(CreateUserError::EmailAlreadyExists),
            Ok(None) => {}
            Err(e) => return Err(CreateUserError::RepositoryError(e.to_string())),
        }

        let hashed_password = self
            .password_hasher
            .hash_password(&password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let new_user = NewUser {
            email,
            full_name: full_name.trim().to_string(),
            hashed_password,
            is_superuser: false,
        };

        match self.repository.create(new_user).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "user registered");
                Ok(user)
            }
            Err(UserRepositoryError::EmailAlreadyExists) => {
                Err(CreateUserError::EmailAlreadyExists)
            }
            Err(e) => Err(CreateUserError::RepositoryError(e.to_string())),
        }
    }
}
