use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lists::OwnerId).integer().not_null())
                    .col(ColumnDef::new(Lists::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Lists::Description).text().null())
                    .col(
                        ColumnDef::new(Lists::IsArchived)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Lists::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Lists::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lists_owner_id")
                            .from(Lists::Table, Lists::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Owner-scoped listing is the hot path.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_lists_owner_id
                ON lists (owner_id);
                "#,
            )
            .await?;

        // Default views exclude archived lists.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_lists_owner_active
                ON lists (owner_id, id)
                WHERE is_archived = false;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lists::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Lists {
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    IsArchived,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
