use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fish::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Fish::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Fish::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Fish::PricePerKg)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Fish::TotalKg)
                            .decimal_len(12, 3)
                            .not_null()
                            .default("0"),
                    )
                    .col(
                        ColumnDef::new(Fish::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Fish::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fish_name")
                    .table(Fish::Table)
                    .col(Fish::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fish::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Fish {
    Table,
    Id,
    Name,
    PricePerKg,
    TotalKg,
    CreatedAt,
    UpdatedAt,
}
