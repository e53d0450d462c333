mod list_messages;
mod message_response;
mod open_conversation;
mod post_message;

pub use list_messages::list_messages_handler;
pub use message_response::{ConversationResponse, TicketMessageResponse};
pub use open_conversation::open_conversation_handler;
pub use post_message::{post_message_handler, PostMessageRequest};

// utoipa path structs
pub use list_messages::__path_list_messages_handler;
pub use open_conversation::__path_open_conversation_handler;
pub use post_message::__path_post_message_handler;
