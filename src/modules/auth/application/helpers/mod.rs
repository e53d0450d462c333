pub mod authenticator;

pub use authenticator::{AuthRejection, Authenticator};
