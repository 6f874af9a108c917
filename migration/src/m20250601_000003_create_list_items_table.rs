use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ListItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ListItems::ListId).integer().not_null())
                    .col(ColumnDef::new(ListItems::Content).text().not_null())
                    .col(
                        ColumnDef::new(ListItems::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ListItems::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ListItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ListItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_items_list_id")
                            .from(ListItems::Table, ListItems::ListId)
                            .to(Lists::Table, Lists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Items are always read per list, sorted by caller-defined order
        // with id as the tie-break.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_list_items_list_order
                ON list_items (list_id, "order", id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ListItems {
    Table,
    Id,
    ListId,
    Content,
    IsCompleted,
    Order,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Lists {
    Table,
    Id,
}
