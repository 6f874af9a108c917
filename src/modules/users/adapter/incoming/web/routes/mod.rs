pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod register_user;
pub mod set_user_active;
pub mod update_user;
pub mod user_dto;

pub use delete_user::delete_user_handler;
pub use get_user::{get_current_user_handler, get_user_handler};
pub use list_users::list_users_handler;
pub use register_user::register_user_handler;
pub use set_user_active::{activate_user_handler, deactivate_user_handler};
pub use update_user::update_user_handler;
pub use user_dto::UserDto;
