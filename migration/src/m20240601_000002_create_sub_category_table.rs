use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000001_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(SubCategory::Id))
                    .col(integer(SubCategory::CategoryId))
                    .col(string_uniq(SubCategory::Name))
                    .col(text(SubCategory::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_category_category_id")
                            .from(SubCategory::Table, SubCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubCategory {
    Table,
    Id,
    CategoryId,
    Name,
    Description,
}
