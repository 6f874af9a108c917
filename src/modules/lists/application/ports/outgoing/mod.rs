pub mod list_query;
pub mod list_repository;

pub use list_query::{ListQuery, ListQueryError};
pub use list_repository::{
    ItemChanges, ListChanges, ListRepository, ListRepositoryError, NewItem, NewList,
};
