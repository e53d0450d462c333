pub mod server_control;

pub use server_control::{ServerControl, ServerControlError};
