pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::message;
pub use modules::settings;
pub use modules::system;
pub use modules::ticket;
pub use modules::user;

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::ConfiguredPasswordHasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::helpers::Authenticator;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    login_user::LoginUserUseCase, register_user::RegisterUserUseCase,
};
use crate::auth::application::AuthUseCases;
use crate::config::AppConfig;
use crate::message::adapter::outgoing::MessageRepositoryPostgres;
use crate::message::application::service::{
    ListMessagesService, OpenConversationService, PostMessageService,
};
use crate::message::application::MessageUseCases;
use crate::settings::adapter::outgoing::SettingsRepositoryPostgres;
use crate::settings::application::service::{GetEmailSettingsService, UpdateEmailSettingsService};
use crate::settings::application::SettingsUseCases;
use crate::system::adapter::outgoing::ActixServerControl;
use crate::system::application::service::ShutdownService;
use crate::system::application::SystemUseCases;
use crate::ticket::adapter::outgoing::TicketRepositoryPostgres;
use crate::ticket::application::service::{
    AssignTicketService, CreateTicketService, DeleteTicketService, GetTicketService,
    ListTicketsService, UpdateTicketService,
};
use crate::ticket::application::TicketUseCases;
use crate::user::application::service::{
    CreateUserService, DeleteUserService, GetCurrentUserService, GetUserService,
    ListUsersService, ResetPasswordService, SuspendUserService, UpdateUserService,
};
use crate::user::application::UserUseCases;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub users: UserUseCases,
    pub tickets: TicketUseCases,
    pub messages: MessageUseCases,
    pub settings: SettingsUseCases,
    pub system: SystemUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(environment = %config.environment, "Starting application...");

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.database.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let ticket_repo = TicketRepositoryPostgres::new(Arc::clone(&db_arc));
    let message_repo = MessageRepositoryPostgres::new(Arc::clone(&db_arc));
    let settings_repo = SettingsRepositoryPostgres::new(Arc::clone(&db_arc));

    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(ConfiguredPasswordHasher::new(&config.hashing));
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let authenticator = web::Data::new(Authenticator::new(
        Arc::clone(&token_provider),
        Arc::new(user_query.clone()),
    ));
    let server_control = ActixServerControl::new();

    let state = AppState {
        auth: AuthUseCases {
            register: Arc::new(RegisterUserUseCase::new(
                user_query.clone(),
                user_repo.clone(),
                Arc::clone(&password_hasher),
                Arc::clone(&token_provider),
            )),
            login: Arc::new(LoginUserUseCase::new(
                user_query.clone(),
                Arc::clone(&password_hasher),
                Arc::clone(&token_provider),
            )),
        },
        users: UserUseCases {
            list: Arc::new(ListUsersService::new(user_query.clone())),
            get: Arc::new(GetUserService::new(user_query.clone())),
            me: Arc::new(GetCurrentUserService::new(user_query.clone())),
            create: Arc::new(CreateUserService::new(
                user_query.clone(),
                user_repo.clone(),
                Arc::clone(&password_hasher),
            )),
            update: Arc::new(UpdateUserService::new(
                user_query.clone(),
                user_repo.clone(),
            )),
            delete: Arc::new(DeleteUserService::new(user_repo.clone())),
            reset_password: Arc::new(ResetPasswordService::new(
                user_query.clone(),
                user_repo.clone(),
                Arc::clone(&password_hasher),
            )),
            suspend: Arc::new(SuspendUserService::new(user_repo)),
        },
        tickets: TicketUseCases {
            create: Arc::new(CreateTicketService::new(ticket_repo.clone())),
            list: Arc::new(ListTicketsService::new(ticket_repo.clone())),
            get: Arc::new(GetTicketService::new(ticket_repo.clone())),
            update: Arc::new(UpdateTicketService::new(ticket_repo.clone())),
            delete: Arc::new(DeleteTicketService::new(ticket_repo.clone())),
            assign: Arc::new(AssignTicketService::new(ticket_repo.clone(), user_query)),
        },
        messages: MessageUseCases {
            post: Arc::new(PostMessageService::new(
                ticket_repo.clone(),
                message_repo.clone(),
            )),
            list: Arc::new(ListMessagesService::new(
                ticket_repo.clone(),
                message_repo.clone(),
            )),
            open_conversation: Arc::new(OpenConversationService::new(ticket_repo, message_repo)),
        },
        settings: SettingsUseCases {
            get_email: Arc::new(GetEmailSettingsService::new(settings_repo.clone())),
            update_email: Arc::new(UpdateEmailSettingsService::new(settings_repo)),
        },
        system: SystemUseCases {
            shutdown: Arc::new(ShutdownService::new(
                Arc::new(server_control.clone()),
                config.shutdown_delay,
            )),
        },
    };

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server listening");

    let openapi = crate::api::openapi::ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(crate::shared::api::custom_json_config())
            .app_data(crate::shared::api::custom_query_config())
            .app_data(crate::shared::api::custom_path_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(authenticator.clone())
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {bind_address}"))?
    .run();

    server_control.attach(server.handle());

    server.await.context("Server terminated with an error")?;
    info!("Server stopped");
    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Users (`/me` must be registered before `/{id}`)
    cfg.service(crate::user::adapter::incoming::web::routes::get_current_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::delete_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::reset_password_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::suspend_user_handler);
    // Tickets
    cfg.service(crate::ticket::adapter::incoming::web::routes::create_ticket_handler);
    cfg.service(crate::ticket::adapter::incoming::web::routes::list_tickets_handler);
    cfg.service(crate::ticket::adapter::incoming::web::routes::get_ticket_handler);
    cfg.service(crate::ticket::adapter::incoming::web::routes::update_ticket_handler);
    cfg.service(crate::ticket::adapter::incoming::web::routes::delete_ticket_handler);
    cfg.service(crate::ticket::adapter::incoming::web::routes::assign_ticket_handler);
    // Messages
    cfg.service(crate::message::adapter::incoming::web::routes::post_message_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::list_messages_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::open_conversation_handler);
    // Settings
    cfg.service(crate::settings::adapter::incoming::web::routes::get_email_settings_handler);
    cfg.service(crate::settings::adapter::incoming::web::routes::update_email_settings_handler);
    // System
    cfg.service(crate::system::adapter::incoming::web::routes::shutdown_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
