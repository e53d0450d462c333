pub mod sea_orm_entity;
mod ticket_repository_postgres;

pub use ticket_repository_postgres::TicketRepositoryPostgres;
