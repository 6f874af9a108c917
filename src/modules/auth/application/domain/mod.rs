pub mod authorization;

pub use authorization::{authorize, authorize_user_listing, AccessDenied, Action, Principal};
