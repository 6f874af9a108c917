pub mod auth;
pub mod lists;
pub mod users;
