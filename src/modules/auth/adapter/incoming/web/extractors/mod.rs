pub mod auth;

pub use auth::{policy_violation_response, AuthenticatedUser};
