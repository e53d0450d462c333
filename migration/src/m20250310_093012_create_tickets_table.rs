use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create tickets table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tickets::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Tickets::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Tickets::Description).text().not_null())
                    .col(
                        ColumnDef::new(Tickets::Status)
                            .string_len(16)
                            .not_null()
                            .default("open"),
                    )
                    .col(
                        ColumnDef::new(Tickets::Priority)
                            .string_len(16)
                            .not_null()
                            .default("medium"),
                    )
                    .col(ColumnDef::new(Tickets::CreatedById).uuid().not_null())
                    .col(ColumnDef::new(Tickets::AssignedToId).uuid())
                    .col(
                        ColumnDef::new(Tickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Tickets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // A creator with tickets cannot be deleted
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_created_by_id")
                            .from(Tickets::Table, Tickets::CreatedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_assigned_to_id")
                            .from(Tickets::Table, Tickets::AssignedToId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE tickets
                ADD CONSTRAINT chk_tickets_status
                CHECK (status IN ('open', 'in_progress', 'resolved', 'closed'));

                ALTER TABLE tickets
                ADD CONSTRAINT chk_tickets_priority
                CHECK (priority IN ('low', 'medium', 'high', 'urgent'));
                "#,
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_tickets_created_by_id
                ON tickets (created_by_id);

                CREATE INDEX IF NOT EXISTS idx_tickets_assigned_to_id
                ON tickets (assigned_to_id)
                WHERE assigned_to_id IS NOT NULL;

                CREATE INDEX IF NOT EXISTS idx_tickets_status_priority
                ON tickets (status, priority, created_at DESC);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_tickets_updated_at
                BEFORE UPDATE ON tickets
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_tickets_updated_at ON tickets;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tickets {
    Table,
    Id,
    Title,
    Description,
    Status,
    Priority,
    CreatedById,
    AssignedToId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
