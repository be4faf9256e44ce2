//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into the domain models defined here at
//! the data boundary, and controllers convert them into DTOs with `into_dto()`.
//! Parameter structs (`Create*Params`, `Update*Params`) carry validated request data
//! from controllers into services.

pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod pagination;
pub mod payment;
pub mod report;
pub mod review;
pub mod student;
