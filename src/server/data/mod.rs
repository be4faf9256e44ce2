//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Repositories return `DbErr` and never apply business rules.

pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod lesson_completion;
pub mod payment;
pub mod report;
pub mod review;
pub mod student;
pub mod sub_category;

#[cfg(test)]
mod test;
