pub mod create_user_service;
pub mod delete_user_service;
pub mod get_current_user_service;
pub mod get_user_service;
pub mod list_users_service;
pub mod reset_password_service;
pub mod suspend_user_service;
pub mod update_user_service;

pub use create_user_service::CreateUserService;
pub use delete_user_service::DeleteUserService;
pub use get_current_user_service::GetCurrentUserService;
pub use get_user_service::GetUserService;
pub use list_users_service::ListUsersService;
pub use reset_password_service::ResetPasswordService;
pub use suspend_user_service::SuspendUserService;
pub use update_user_service::UpdateUserService;
