pub mod login_user;

pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo};
