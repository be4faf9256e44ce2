use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000001_create_category_table::Category,
    m20240601_000002_create_sub_category_table::SubCategory,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(integer(Course::CategoryId))
                    .col(integer_null(Course::SubCategoryId))
                    .col(string(Course::Title))
                    .col(text(Course::Description))
                    .col(double(Course::Price))
                    .col(timestamp_with_time_zone(Course::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_category_id")
                            .from(Course::Table, Course::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_sub_category_id")
                            .from(Course::Table, Course::SubCategoryId)
                            .to(SubCategory::Table, SubCategory::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    CategoryId,
    SubCategoryId,
    Title,
    Description,
    Price,
    CreatedAt,
}
