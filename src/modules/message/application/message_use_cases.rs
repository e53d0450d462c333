use std::sync::Arc;

use crate::modules::message::application::ports::incoming::use_cases::{
    ListMessagesUseCase, OpenConversationUseCase, PostMessageUseCase,
};

#[derive(Clone)]
pub struct MessageUseCases {
    pub post: Arc<dyn PostMessageUseCase + Send + Sync>,
    pub list: Arc<dyn ListMessagesUseCase + Send + Sync>,
    pub open_conversation: Arc<dyn OpenConversationUseCase + Send + Sync>,
}
