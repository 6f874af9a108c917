use chrono::{DateTime, Utc};

/// A to-do list. The owner is fixed at creation and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoList {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single entry in a list. Its effective owner is the owner of its
/// parent list.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: i32,
    pub list_id: i32,
    pub content: String,
    pub is_completed: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
