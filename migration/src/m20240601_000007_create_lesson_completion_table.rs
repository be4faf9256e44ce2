use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000005_create_lesson_table::Lesson,
    m20240601_000006_create_enrollment_table::Enrollment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LessonCompletion::Table)
                    .if_not_exists()
                    .col(pk_auto(LessonCompletion::Id))
                    .col(integer(LessonCompletion::EnrollmentId))
                    .col(integer(LessonCompletion::LessonId))
                    .col(timestamp_with_time_zone(LessonCompletion::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_completion_enrollment_id")
                            .from(LessonCompletion::Table, LessonCompletion::EnrollmentId)
                            .to(Enrollment::Table, Enrollment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_completion_lesson_id")
                            .from(LessonCompletion::Table, LessonCompletion::LessonId)
                            .to(Lesson::Table, Lesson::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lesson_completion_enrollment_lesson")
                    .table(LessonCompletion::Table)
                    .col(LessonCompletion::EnrollmentId)
                    .col(LessonCompletion::LessonId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LessonCompletion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LessonCompletion {
    Table,
    Id,
    EnrollmentId,
    LessonId,
    CompletedAt,
}
