mod login_user;
mod register_user;

pub use login_user::{login_user_handler, AuthTokenResponse, LoginRequestDto, SessionUser};
pub use register_user::{register_user_handler, RegisterUserRequest};

// utoipa path structs
pub use login_user::__path_login_user_handler;
pub use register_user::__path_register_user_handler;
