use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000003_create_course_table::Course, m20240601_000004_create_student_table::Student,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::StudentId))
                    .col(integer(Review::CourseId))
                    .col(integer(Review::Rating))
                    .col(text(Review::Comment))
                    .col(timestamp_with_time_zone(Review::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_student_id")
                            .from(Review::Table, Review::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_course_id")
                            .from(Review::Table, Review::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One review per (student, course)
        manager
            .create_index(
                Index::create()
                    .name("idx_review_student_course")
                    .table(Review::Table)
                    .col(Review::StudentId)
                    .col(Review::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    StudentId,
    CourseId,
    Rating,
    Comment,
    CreatedAt,
}
