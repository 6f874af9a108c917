use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PolicyViolation,
};

const MIN_LENGTH: usize = 8;
// bcrypt ignores everything past 72 bytes, so longer inputs are rejected
// outright instead of silently truncated.
const MAX_BYTES: usize = 72;

pub struct BasicPasswordPolicy;

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), Vec<PolicyViolation>> {
        let mut violations = Vec::new();

        if password.chars().count() < MIN_LENGTH {
            violations.push(PolicyViolation::TooShort {
                minimum: MIN_LENGTH,
            });
        }

        if password.len() > MAX_BYTES {
            violations.push(PolicyViolation::TooLong {
                maximum_bytes: MAX_BYTES,
            });
        }

        if !password.chars().any(|c| c.is_uppercase()) {
            violations.push(PolicyViolation::MissingUppercase);
        }

        if !password.chars().any(|c| c.is_lowercase()) {
            violations.push(PolicyViolation::MissingLowercase);
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            violations.push(PolicyViolation::MissingDigit);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
