use std::fmt;

/// A single rule the candidate password failed. Validation collects every
/// violation instead of stopping at the first one, so the caller can report
/// the complete list back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    TooShort { minimum: usize },
    TooLong { maximum_bytes: usize },
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
}

impl fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyViolation::TooShort { minimum } => {
                write!(f, "Password must be at least {} characters long", minimum)
            }
            PolicyViolation::TooLong { maximum_bytes } => {
                write!(f, "Password must be at most {} bytes long", maximum_bytes)
            }
            PolicyViolation::MissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            PolicyViolation::MissingLowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            PolicyViolation::MissingDigit => {
                write!(f, "Password must contain at least one digit")
            }
        }
    }
}

pub trait PasswordPolicy: Send + Sync {
    /// Returns every rule the password violates, or Ok(()) if it passes.
    fn validate(&self, password: &str) -> Result<(), Vec<PolicyViolation>>;
}
