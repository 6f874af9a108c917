pub mod login_user;

pub use login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginUserUseCase};
