pub mod list_messages_service;
pub mod open_conversation_service;
pub mod post_message_service;

pub use list_messages_service::ListMessagesService;
pub use open_conversation_service::OpenConversationService;
pub use post_message_service::PostMessageService;
