pub mod entities;

pub use entities::{TodoItem, TodoList};
