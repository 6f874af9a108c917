use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::{authorize, Action, Principal};
use crate::users::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone)]
pub enum DeleteUserError {
    NotFound,
    AccessDenied,
    RepositoryError(String),
}

impl std::fmt::Display for DeleteUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteUserError::NotFound => write!(f, "User not found"),
            DeleteUserError::AccessDenied => write!(f, "Not allowed to delete this user"),
            DeleteUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteUserError {}

#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, principal: &Principal, user_id: i32) -> Result<(), DeleteUserError>;
}

pub struct DeleteUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IDeleteUserUseCase for DeleteUserUseCase {
    async fn execute(&self, principal: &Principal, user_id: i32) -> Result<(), DeleteUserError> {
        authorize(principal, Action::Delete, user_id)
            .map_err(|_| DeleteUserError::AccessDenied)?;

        // The repository removes the user's lists and items in the same
        // transaction.
        match self.repository.delete(user_id).await {
            Ok(()) => {
                tracing::info!(user_id, "user deleted");
                Ok(())
            }
            Err(UserRepositoryError::NotFound) => Err(DeleteUserError::NotFound),
            Err(e) => Err(DeleteUserError::RepositoryError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::application::domain::User;
    use crate::users::application::ports::outgoing::{NewUser, UserChanges};
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockUserRepository {
        missing: bool,
        deleted: Mutex<Vec<i32>>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create(&self, _new_user: NewUser) -> Result<User, UserRepositoryError> {
            Err(UserRepositoryError::DatabaseError("unused".to_string()))
        }

        async fn update(
            &self,
            _user_id: i32,
            _changes: UserChanges,
        ) -> Result<User, UserRepositoryError> {
            Err(UserRepositoryError::NotFound)
        }

        async fn delete(&self, user_id: i32) -> Result<(), UserRepositoryError> {
            if self.missing {
                return Err(UserRepositoryError::NotFound);
            }
            self.deleted.lock().unwrap().push(user_id);
            Ok(())
        }

        async fn set_active(
            &self,
            _user_id: i32,
            _is_active: bool,
        ) -> Result<User, UserRepositoryError> {
            Err(UserRepositoryError::NotFound)
        }

        async fn record_login(
            &self,
            _user_id: i32,
            _at: DateTime<Utc>,
        ) -> Result<(), UserRepositoryError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_delete_own_account() {
        let repository = Arc::new(MockUserRepository::default());
        let use_case = DeleteUserUseCase::new(repository.clone());
        let principal = Principal {
            user_id: 7,
            is_superuser: false,
        };

        use_case.execute(&principal, 7).await.unwrap();
        assert_eq!(*repository.deleted.lock().unwrap(), vec![7]);
    }

    #[tokio::test]
    async fn test_delete_other_account_denied() {
        let repository = Arc::new(MockUserRepository::default());
        let use_case = DeleteUserUseCase::new(repository.clone());
        let principal = Principal {
            user_id: 7,
            is_superuser: false,
        };

        let result = use_case.execute(&principal, 8).await;
        assert!(matches!(result, Err(DeleteUserError::AccessDenied)));
        assert!(repository.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_superuser_deletes_any_account() {
        let repository = Arc::new(MockUserRepository::default());
        let use_case = DeleteUserUseCase::new(repository.clone());
        let admin = Principal {
            user_id: 1,
            is_superuser: true,
        };

        use_case.execute(&admin, 8).await.unwrap();
        assert_eq!(*repository.deleted.lock().unwrap(), vec![8]);
    }

    #[tokio::test]
    async fn test_delete_missing_user() {
        let repository = Arc::new(MockUserRepository {
            missing: true,
            deleted: Mutex::new(vec![]),
        });
        let use_case = DeleteUserUseCase::new(repository);
        let admin = Principal {
            user_id: 1,
            is_superuser: true,
        };

        let result = use_case.execute(&admin, 99).await;
        assert!(matches!(result, Err(DeleteUserError::NotFound)));
    }
}
