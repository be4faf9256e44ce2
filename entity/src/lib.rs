//! SeaORM entities for the course platform schema.
//!
//! One module per table. Child tables (lessons, enrollments, reviews, reports, payment
//! details, lesson completions) reference their owning aggregate by foreign key; the
//! `Relation` enums describe those links so the schema can be generated from the entities
//! in tests.

pub mod prelude;

pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod lesson_completion;
pub mod payment;
pub mod payment_detail;
pub mod report;
pub mod review;
pub mod student;
pub mod sub_category;
