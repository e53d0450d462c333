use crate::api::schemas::{ErrorDetail, ErrorResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    AuthTokenResponse, LoginRequestDto, RegisterUserRequest, SessionUser,
};
use crate::auth::application::domain::entities::UserRole;

// Users
use crate::user::adapter::incoming::web::routes::{
    CreateUserRequest, ResetPasswordRequest, UpdateUserRequest, UserResponse,
};

// Tickets
use crate::ticket::adapter::incoming::web::routes::{
    AssignTicketRequest, CreateTicketRequest, TicketResponse, UpdateTicketRequest,
};
use crate::ticket::application::domain::{TicketPriority, TicketStatus};

// Messages
use crate::message::adapter::incoming::web::routes::{
    ConversationResponse, PostMessageRequest, TicketMessageResponse,
};
use crate::message::application::domain::ConversationStatus;

// Settings & system
use crate::settings::adapter::incoming::web::routes::EmailSettingsDto;
use crate::system::adapter::incoming::web::routes::ShutdownResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Helpdesk API",
        version = "1.0.0",
        description = "Ticketing backend: users, tickets, messages and mail settings",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // User endpoints
        crate::user::adapter::incoming::web::routes::get_current_user_handler,
        crate::user::adapter::incoming::web::routes::list_users_handler,
        crate::user::adapter::incoming::web::routes::get_user_handler,
        crate::user::adapter::incoming::web::routes::create_user_handler,
        crate::user::adapter::incoming::web::routes::update_user_handler,
        crate::user::adapter::incoming::web::routes::delete_user_handler,
        crate::user::adapter::incoming::web::routes::reset_password_handler,
        crate::user::adapter::incoming::web::routes::suspend_user_handler,

        // Ticket endpoints
        crate::ticket::adapter::incoming::web::routes::create_ticket_handler,
        crate::ticket::adapter::incoming::web::routes::list_tickets_handler,
        crate::ticket::adapter::incoming::web::routes::get_ticket_handler,
        crate::ticket::adapter::incoming::web::routes::update_ticket_handler,
        crate::ticket::adapter::incoming::web::routes::delete_ticket_handler,
        crate::ticket::adapter::incoming::web::routes::assign_ticket_handler,

        // Message endpoints
        crate::message::adapter::incoming::web::routes::post_message_handler,
        crate::message::adapter::incoming::web::routes::list_messages_handler,
        crate::message::adapter::incoming::web::routes::open_conversation_handler,

        // Settings endpoints
        crate::settings::adapter::incoming::web::routes::get_email_settings_handler,
        crate::settings::adapter::incoming::web::routes::update_email_settings_handler,

        // System endpoints
        crate::system::adapter::incoming::web::routes::shutdown_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            MessageResponse,

            // Auth DTOs
            RegisterUserRequest,
            LoginRequestDto,
            AuthTokenResponse,
            SessionUser,
            UserRole,

            // User DTOs
            CreateUserRequest,
            UpdateUserRequest,
            ResetPasswordRequest,
            UserResponse,

            // Ticket DTOs
            CreateTicketRequest,
            UpdateTicketRequest,
            AssignTicketRequest,
            TicketResponse,
            TicketStatus,
            TicketPriority,

            // Message DTOs
            PostMessageRequest,
            TicketMessageResponse,
            ConversationResponse,
            ConversationStatus,

            // Settings & system DTOs
            EmailSettingsDto,
            ShutdownResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "User management endpoints"),
        (name = "tickets", description = "Ticket lifecycle endpoints"),
        (name = "messages", description = "Ticket messages and conversations"),
        (name = "settings", description = "Mail server settings"),
        (name = "system", description = "Process control"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /api/v1/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
