//! Wire-level data transfer objects.
//!
//! Every request and response body of the HTTP API is defined here with serde and
//! utoipa derives so the OpenAPI document and the JSON shape stay in lockstep.

pub mod api;
pub mod auth;
pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod payment;
pub mod report;
pub mod review;
pub mod student;
