//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation rules such as purchase and completion checks
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Errors**: Mapping rule violations to `DomainError` codes

pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod payment;
pub mod report;
pub mod review;
pub mod student;
pub mod sub_category;

#[cfg(test)]
mod test;
