use chrono::{DateTime, Utc};

/// A registered account. `email` is always stored lowercase; lookups
/// normalize before comparing so the unique index is effectively
/// case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub hashed_password: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}
