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
                    .table(Report::Table)
                    .if_not_exists()
                    .col(pk_auto(Report::Id))
                    .col(integer(Report::CourseId))
                    .col(integer(Report::StudentId))
                    .col(text(Report::Content))
                    .col(timestamp_with_time_zone(Report::SentAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_course_id")
                            .from(Report::Table, Report::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_student_id")
                            .from(Report::Table, Report::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Report::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Report {
    Table,
    Id,
    CourseId,
    StudentId,
    Content,
    SentAt,
}
