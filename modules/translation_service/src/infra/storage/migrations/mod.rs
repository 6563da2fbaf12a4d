//! Database migrations for translation service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240801_000001_create_translation::Migration)]
    }
}

mod m20240801_000001_create_translation {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Translation::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Translation::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Translation::IpAddress).string().not_null())
                        .col(ColumnDef::new(Translation::InputText).text().not_null())
                        .col(ColumnDef::new(Translation::TranslatedText).text().not_null())
                        .col(
                            ColumnDef::new(Translation::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_translation_created_at")
                        .table(Translation::Table)
                        .col(Translation::CreatedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Translation::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Translation {
        Table,
        Id,
        IpAddress,
        InputText,
        TranslatedText,
        CreatedAt,
    }
}
