pub mod message;

pub use message::{
    validate_content, Conversation, ConversationStatus, Message, MessageValidationError,
    UnknownConversationStatus,
};
