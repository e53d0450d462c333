pub mod sea_orm_entity;
mod settings_repository_postgres;

pub use settings_repository_postgres::SettingsRepositoryPostgres;
