pub mod message_repository;

pub use message_repository::{CreateMessageData, MessageRepository, MessageRepositoryError};
