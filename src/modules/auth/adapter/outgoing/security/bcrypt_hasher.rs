use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};
use tokio::task;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

// bcrypt silently ignores bytes past this point, so longer inputs are
// refused instead of hashed.
const BCRYPT_MAX_BYTES: usize = 72;

pub struct BcryptHasher;

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        if password.len() > BCRYPT_MAX_BYTES {
            return Err(HashError::InputTooLong);
        }

        let password = password.to_string();
        task::spawn_blocking(move || hash(&password, DEFAULT_COST))
            .await
            .map_err(|_| HashError::TaskFailed)?
            .map_err(|_| HashError::HashFailed)
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        if password.len() > BCRYPT_MAX_BYTES {
            return Ok(false);
        }

        let password = password.to_string();
        let hashed = hashed.to_string();
        task::spawn_blocking(move || verify(&password, &hashed))
            .await
            .map_err(|_| HashError::TaskFailed)?
            .map_err(|_| HashError::VerifyFailed)
    }
}
