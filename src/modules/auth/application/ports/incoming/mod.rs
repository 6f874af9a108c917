pub mod password_policy;

pub use password_policy::{PasswordPolicy, PolicyViolation};
