use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000003_create_course_table::Course, m20240601_000008_create_payment_table::Payment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentDetail::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentDetail::Id))
                    .col(integer(PaymentDetail::PaymentId))
                    .col(integer(PaymentDetail::CourseId))
                    .col(double(PaymentDetail::Price))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_detail_payment_id")
                            .from(PaymentDetail::Table, PaymentDetail::PaymentId)
                            .to(Payment::Table, Payment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_detail_course_id")
                            .from(PaymentDetail::Table, PaymentDetail::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentDetail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PaymentDetail {
    Table,
    Id,
    PaymentId,
    CourseId,
    Price,
}
