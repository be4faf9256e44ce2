pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_category_table;
mod m20240601_000002_create_sub_category_table;
mod m20240601_000003_create_course_table;
mod m20240601_000004_create_student_table;
mod m20240601_000005_create_lesson_table;
mod m20240601_000006_create_enrollment_table;
mod m20240601_000007_create_lesson_completion_table;
mod m20240601_000008_create_payment_table;
mod m20240601_000009_create_payment_detail_table;
mod m20240601_000010_create_review_table;
mod m20240601_000011_create_report_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_category_table::Migration),
            Box::new(m20240601_000002_create_sub_category_table::Migration),
            Box::new(m20240601_000003_create_course_table::Migration),
            Box::new(m20240601_000004_create_student_table::Migration),
            Box::new(m20240601_000005_create_lesson_table::Migration),
            Box::new(m20240601_000006_create_enrollment_table::Migration),
            Box::new(m20240601_000007_create_lesson_completion_table::Migration),
            Box::new(m20240601_000008_create_payment_table::Migration),
            Box::new(m20240601_000009_create_payment_detail_table::Migration),
            Box::new(m20240601_000010_create_review_table::Migration),
            Box::new(m20240601_000011_create_report_table::Migration),
        ]
    }
}
