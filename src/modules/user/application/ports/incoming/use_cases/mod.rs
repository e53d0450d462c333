mod create_user;
mod delete_user;
mod get_current_user;
mod get_user;
mod list_users;
mod reset_password;
mod suspend_user;
mod update_user;

pub use create_user::{CreateUserCommand, CreateUserError, CreateUserUseCase};
pub use delete_user::{DeleteUserError, DeleteUserUseCase};
pub use get_current_user::{GetCurrentUserError, GetCurrentUserUseCase};
pub use get_user::{GetUserError, GetUserUseCase};
pub use list_users::{ListUsersError, ListUsersUseCase};
pub use reset_password::{ResetPasswordError, ResetPasswordUseCase};
pub use suspend_user::{SuspendUserError, SuspendUserUseCase};
pub use update_user::{UpdateUserCommand, UpdateUserError, UpdateUserUseCase};
