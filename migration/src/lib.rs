pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250310_093012_create_tickets_table;
mod m20250310_093540_create_conversations_table;
mod m20250310_094105_create_messages_table;
mod m20250312_140230_create_email_settings_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250310_093012_create_tickets_table::Migration),
            Box::new(m20250310_093540_create_conversations_table::Migration),
            Box::new(m20250310_094105_create_messages_table::Migration),
            Box::new(m20250312_140230_create_email_settings_table::Migration),
        ]
    }
}
