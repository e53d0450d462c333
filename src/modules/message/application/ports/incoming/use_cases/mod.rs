mod list_messages;
mod open_conversation;
mod post_message;

pub use list_messages::{ListMessagesError, ListMessagesUseCase};
pub use open_conversation::{OpenConversationError, OpenConversationUseCase};
pub use post_message::{PostMessageCommand, PostMessageError, PostMessageUseCase};
