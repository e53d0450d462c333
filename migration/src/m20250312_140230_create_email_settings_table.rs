use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmailSettings::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(EmailSettings::ImapHost).string_len(255).not_null())
                    .col(ColumnDef::new(EmailSettings::ImapPort).integer().not_null())
                    .col(ColumnDef::new(EmailSettings::ImapUsername).string_len(255).not_null())
                    .col(ColumnDef::new(EmailSettings::ImapPassword).string_len(255).not_null())
                    .col(ColumnDef::new(EmailSettings::SmtpHost).string_len(255).not_null())
                    .col(ColumnDef::new(EmailSettings::SmtpPort).integer().not_null())
                    .col(ColumnDef::new(EmailSettings::SmtpUsername).string_len(255).not_null())
                    .col(ColumnDef::new(EmailSettings::SmtpPassword).string_len(255).not_null())
                    .col(
                        ColumnDef::new(EmailSettings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(EmailSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE email_settings
                ADD CONSTRAINT chk_email_settings_ports
                CHECK (imap_port BETWEEN 1 AND 65535 AND smtp_port BETWEEN 1 AND 65535);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_email_settings_updated_at
                BEFORE UPDATE ON email_settings
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
                "DROP TRIGGER IF EXISTS update_email_settings_updated_at ON email_settings",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EmailSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmailSettings {
    Table,
    Id,
    ImapHost,
    ImapPort,
    ImapUsername,
    ImapPassword,
    SmtpHost,
    SmtpPort,
    SmtpUsername,
    SmtpPassword,
    CreatedAt,
    UpdatedAt,
}
