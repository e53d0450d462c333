pub mod auth;
pub mod message;
pub mod settings;
pub mod system;
pub mod ticket;
pub mod user;
