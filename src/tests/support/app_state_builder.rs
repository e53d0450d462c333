use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase, register_user::IRegisterUserUseCase,
};
use crate::auth::application::AuthUseCases;
use crate::modules::message::application::ports::incoming::use_cases::{
    ListMessagesUseCase, OpenConversationUseCase, PostMessageUseCase,
};
use crate::modules::message::application::MessageUseCases;
use crate::modules::settings::application::ports::incoming::use_cases::{
    GetEmailSettingsUseCase, UpdateEmailSettingsUseCase,
};
use crate::modules::settings::application::SettingsUseCases;
use crate::modules::system::application::ports::incoming::use_cases::ShutdownUseCase;
use crate::modules::system::application::SystemUseCases;
use crate::modules::ticket::application::ports::incoming::use_cases::{
    AssignTicketUseCase, CreateTicketUseCase, DeleteTicketUseCase, GetTicketUseCase,
    ListTicketsUseCase, UpdateTicketUseCase,
};
use crate::modules::ticket::application::TicketUseCases;
use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, GetCurrentUserUseCase, GetUserUseCase,
    ListUsersUseCase, ResetPasswordUseCase, SuspendUserUseCase, UpdateUserUseCase,
};
use crate::modules::user::application::UserUseCases;
use crate::tests::support::stubs::Unwired;
use crate::AppState;

/// Builds an `AppState` whose use cases are all [`Unwired`] except the ones a
/// test swaps in.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    users: UserUseCases,
    tickets: TicketUseCases,
    messages: MessageUseCases,
    settings: SettingsUseCases,
    system: SystemUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let unwired = Arc::new(Unwired);
        Self {
            auth: AuthUseCases {
                register: unwired.clone(),
                login: unwired.clone(),
            },
            users: UserUseCases {
                list: unwired.clone(),
                get: unwired.clone(),
                me: unwired.clone(),
                create: unwired.clone(),
                update: unwired.clone(),
                delete: unwired.clone(),
                reset_password: unwired.clone(),
                suspend: unwired.clone(),
            },
            tickets: TicketUseCases {
                create: unwired.clone(),
                list: unwired.clone(),
                get: unwired.clone(),
                update: unwired.clone(),
                delete: unwired.clone(),
                assign: unwired.clone(),
            },
            messages: MessageUseCases {
                post: unwired.clone(),
                list: unwired.clone(),
                open_conversation: unwired.clone(),
            },
            settings: SettingsUseCases {
                get_email: unwired.clone(),
                update_email: unwired.clone(),
            },
            system: SystemUseCases { shutdown: unwired },
        }
    }
}

impl TestAppStateBuilder {
    // ------------------------------------------------------------------ auth

    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    // ----------------------------------------------------------------- users

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + Send + Sync + 'static) -> Self {
        self.users.list = Arc::new(uc);
        self
    }

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + Send + Sync + 'static) -> Self {
        self.users.get = Arc::new(uc);
        self
    }

    pub fn with_current_user(
        mut self,
        uc: impl GetCurrentUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.users.me = Arc::new(uc);
        self
    }

    pub fn with_create_user(mut self, uc: impl CreateUserUseCase + Send + Sync + 'static) -> Self {
        self.users.create = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + Send + Sync + 'static) -> Self {
        self.users.update = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + Send + Sync + 'static) -> Self {
        self.users.delete = Arc::new(uc);
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: impl ResetPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.users.reset_password = Arc::new(uc);
        self
    }

    pub fn with_suspend_user(
        mut self,
        uc: impl SuspendUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.users.suspend = Arc::new(uc);
        self
    }

    // --------------------------------------------------------------- tickets

    pub fn with_create_ticket(
        mut self,
        uc: impl CreateTicketUseCase + Send + Sync + 'static,
    ) -> Self {
        self.tickets.create = Arc::new(uc);
        self
    }

    pub fn with_list_tickets(
        mut self,
        uc: impl ListTicketsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.tickets.list = Arc::new(uc);
        self
    }

    pub fn with_get_ticket(mut self, uc: impl GetTicketUseCase + Send + Sync + 'static) -> Self {
        self.tickets.get = Arc::new(uc);
        self
    }

    pub fn with_update_ticket(
        mut self,
        uc: impl UpdateTicketUseCase + Send + Sync + 'static,
    ) -> Self {
        self.tickets.update = Arc::new(uc);
        self
    }

    pub fn with_delete_ticket(
        mut self,
        uc: impl DeleteTicketUseCase + Send + Sync + 'static,
    ) -> Self {
        self.tickets.delete = Arc::new(uc);
        self
    }

    pub fn with_assign_ticket(
        mut self,
        uc: impl AssignTicketUseCase + Send + Sync + 'static,
    ) -> Self {
        self.tickets.assign = Arc::new(uc);
        self
    }

    // -------------------------------------------------------------- messages

    pub fn with_post_message(
        mut self,
        uc: impl PostMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.messages.post = Arc::new(uc);
        self
    }

    pub fn with_list_messages(
        mut self,
        uc: impl ListMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.messages.list = Arc::new(uc);
        self
    }

    pub fn with_open_conversation(
        mut self,
        uc: impl OpenConversationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.messages.open_conversation = Arc::new(uc);
        self
    }

    // ------------------------------------------------------ settings, system

    pub fn with_get_email_settings(
        mut self,
        uc: impl GetEmailSettingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.settings.get_email = Arc::new(uc);
        self
    }

    pub fn with_update_email_settings(
        mut self,
        uc: impl UpdateEmailSettingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.settings.update_email = Arc::new(uc);
        self
    }

    pub fn with_shutdown(mut self, uc: impl ShutdownUseCase + Send + Sync + 'static) -> Self {
        self.system.shutdown = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            users: self.users,
            tickets: self.tickets,
            messages: self.messages,
            settings: self.settings,
            system: self.system,
        })
    }
}
