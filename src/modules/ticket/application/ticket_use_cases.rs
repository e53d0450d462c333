use std::sync::Arc;

use crate::modules::ticket::application::ports::incoming::use_cases::{
    AssignTicketUseCase, CreateTicketUseCase, DeleteTicketUseCase, GetTicketUseCase,
    ListTicketsUseCase, UpdateTicketUseCase,
};

#[derive(Clone)]
pub struct TicketUseCases {
    pub create: Arc<dyn CreateTicketUseCase + Send + Sync>,
    pub list: Arc<dyn ListTicketsUseCase + Send + Sync>,
    pub get: Arc<dyn GetTicketUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTicketUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTicketUseCase + Send + Sync>,
    pub assign: Arc<dyn AssignTicketUseCase + Send + Sync>,
}
