//! Placeholder use cases for the parts of `AppState` a test does not exercise.
//! Reaching one of them means the test wired the wrong handler.

use async_trait::async_trait;
use std::time::Duration;

use crate::auth::application::domain::entities::{Caller, User, UserId};
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginError, LoginRequest};
use crate::auth::application::use_cases::register_user::{
    AuthSession, IRegisterUserUseCase, RegisterUserError, RegisterUserInput,
};
use crate::modules::message::application::domain::{Conversation, Message};
use crate::modules::message::application::ports::incoming::use_cases::{
    ListMessagesError, ListMessagesUseCase, OpenConversationError, OpenConversationUseCase,
    PostMessageCommand, PostMessageError, PostMessageUseCase,
};
use crate::modules::settings::application::domain::EmailSettings;
use crate::modules::settings::application::ports::incoming::use_cases::{
    GetEmailSettingsError, GetEmailSettingsUseCase, UpdateEmailSettingsError,
    UpdateEmailSettingsUseCase,
};
use crate::modules::system::application::ports::incoming::use_cases::{
    ShutdownError, ShutdownUseCase,
};
use crate::modules::ticket::application::domain::{Ticket, TicketId};
use crate::modules::ticket::application::ports::incoming::use_cases::{
    AssignTicketError, AssignTicketUseCase, CreateTicketCommand, CreateTicketError,
    CreateTicketUseCase, DeleteTicketError, DeleteTicketUseCase, GetTicketError,
    GetTicketUseCase, ListTicketsError, ListTicketsUseCase, UpdateTicketCommand,
    UpdateTicketError, UpdateTicketUseCase,
};
use crate::modules::ticket::application::ports::outgoing::TicketFilter;
use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserError, CreateUserUseCase, DeleteUserError, DeleteUserUseCase,
    GetCurrentUserError, GetCurrentUserUseCase, GetUserError, GetUserUseCase, ListUsersError,
    ListUsersUseCase, ResetPasswordError, ResetPasswordUseCase, SuspendUserError,
    SuspendUserUseCase, UpdateUserCommand, UpdateUserError, UpdateUserUseCase,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Unwired;

// ============================================================================
// Auth
// ============================================================================

#[async_trait]
impl IRegisterUserUseCase for Unwired {
    async fn execute(&self, _: RegisterUserInput) -> Result<AuthSession, RegisterUserError> {
        unimplemented!("register use case not wired in this test")
    }
}

#[async_trait]
impl ILoginUserUseCase for Unwired {
    async fn execute(&self, _: LoginRequest) -> Result<AuthSession, LoginError> {
        unimplemented!("login use case not wired in this test")
    }
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
impl ListUsersUseCase for Unwired {
    async fn execute(&self, _: &Caller) -> Result<Vec<User>, ListUsersError> {
        unimplemented!("list users not wired in this test")
    }
}

#[async_trait]
impl GetUserUseCase for Unwired {
    async fn execute(&self, _: &Caller, _: UserId) -> Result<User, GetUserError> {
        unimplemented!("get user not wired in this test")
    }
}

#[async_trait]
impl GetCurrentUserUseCase for Unwired {
    async fn execute(&self, _: &Caller) -> Result<User, GetCurrentUserError> {
        unimplemented!("current user not wired in this test")
    }
}

#[async_trait]
impl CreateUserUseCase for Unwired {
    async fn execute(&self, _: &Caller, _: CreateUserCommand) -> Result<User, CreateUserError> {
        unimplemented!("create user not wired in this test")
    }
}

#[async_trait]
impl UpdateUserUseCase for Unwired {
    async fn execute(
        &self,
        _: &Caller,
        _: UserId,
        _: UpdateUserCommand,
    ) -> Result<User, UpdateUserError> {
        unimplemented!("update user not wired in this test")
    }
}

#[async_trait]
impl DeleteUserUseCase for Unwired {
    async fn execute(&self, _: &Caller, _: UserId) -> Result<(), DeleteUserError> {
        unimplemented!("delete user not wired in this test")
    }
}

#[async_trait]
impl ResetPasswordUseCase for Unwired {
    async fn execute(&self, _: &Caller, _: UserId, _: String) -> Result<(), ResetPasswordError> {
        unimplemented!("reset password not wired in this test")
    }
}

#[async_trait]
impl SuspendUserUseCase for Unwired {
    async fn execute(&self, _: &Caller, _: UserId) -> Result<User, SuspendUserError> {
        unimplemented!("suspend user not wired in this test")
    }
}

// ============================================================================
// Tickets
// ============================================================================

#[async_trait]
impl CreateTicketUseCase for Unwired {
    async fn execute(
        &self,
        _: &Caller,
        _: CreateTicketCommand,
    ) -> Result<Ticket, CreateTicketError> {
        unimplemented!("create ticket not wired in this test")
    }
}

#[async_trait]
impl ListTicketsUseCase for Unwired {
    async fn execute(&self, _: TicketFilter) -> Result<Vec<Ticket>, ListTicketsError> {
        unimplemented!("list tickets not wired in this test")
    }
}

#[async_trait]
impl GetTicketUseCase for Unwired {
    async fn execute(&self, _: TicketId) -> Result<Ticket, GetTicketError> {
        unimplemented!("get ticket not wired in this test")
    }
}

#[async_trait]
impl UpdateTicketUseCase for Unwired {
    async fn execute(
        &self,
        _: &Caller,
        _: TicketId,
        _: UpdateTicketCommand,
    ) -> Result<Ticket, UpdateTicketError> {
        unimplemented!("update ticket not wired in this test")
    }
}

#[async_trait]
impl DeleteTicketUseCase for Unwired {
    async fn execute(&self, _: &Caller, _: TicketId) -> Result<(), DeleteTicketError> {
        unimplemented!("delete ticket not wired in this test")
    }
}

#[async_trait]
impl AssignTicketUseCase for Unwired {
    async fn execute(&self, _: &Caller, _: TicketId, _: UserId) -> Result<Ticket, AssignTicketError> {
        unimplemented!("assign ticket not wired in this test")
    }
}

// ============================================================================
// Messages
// ============================================================================

#[async_trait]
impl PostMessageUseCase for Unwired {
    async fn execute(
        &self,
        _: &Caller,
        _: TicketId,
        _: PostMessageCommand,
    ) -> Result<Message, PostMessageError> {
        unimplemented!("post message not wired in this test")
    }
}

#[async_trait]
impl ListMessagesUseCase for Unwired {
    async fn execute(&self, _: TicketId) -> Result<Vec<Message>, ListMessagesError> {
        unimplemented!("list messages not wired in this test")
    }
}

#[async_trait]
impl OpenConversationUseCase for Unwired {
    async fn execute(&self, _: &Caller, _: TicketId) -> Result<Conversation, OpenConversationError> {
        unimplemented!("open conversation not wired in this test")
    }
}

// ============================================================================
// Settings and system
// ============================================================================

#[async_trait]
impl GetEmailSettingsUseCase for Unwired {
    async fn execute(&self, _: &Caller) -> Result<EmailSettings, GetEmailSettingsError> {
        unimplemented!("email settings read not wired in this test")
    }
}

#[async_trait]
impl UpdateEmailSettingsUseCase for Unwired {
    async fn execute(
        &self,
        _: &Caller,
        _: EmailSettings,
    ) -> Result<EmailSettings, UpdateEmailSettingsError> {
        unimplemented!("email settings update not wired in this test")
    }
}

#[async_trait]
impl ShutdownUseCase for Unwired {
    async fn execute(&self, _: &Caller) -> Result<Duration, ShutdownError> {
        unimplemented!("shutdown not wired in this test")
    }
}
