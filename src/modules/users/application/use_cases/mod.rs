pub mod create_user;
pub mod delete_user;
pub mod fetch_user;
pub mod list_users;
pub mod set_user_active;
pub mod update_user;

pub use create_user::{CreateUserError, CreateUserUseCase, ICreateUserUseCase};
pub use delete_user::{DeleteUserError, DeleteUserUseCase, IDeleteUserUseCase};
pub use fetch_user::{FetchUserError, FetchUserUseCase, IFetchUserUseCase};
pub use list_users::{IListUsersUseCase, ListUsersError, ListUsersUseCase};
pub use set_user_active::{ISetUserActiveUseCase, SetUserActiveError, SetUserActiveUseCase};
pub use update_user::{IUpdateUserUseCase, UpdateUserError, UpdateUserRequest, UpdateUserUseCase};
