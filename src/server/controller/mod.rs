//! HTTP request handlers.
//!
//! Each submodule exposes the axum handlers for one entity family. Handlers resolve
//! the caller's identity where an operation is self-scoped, convert DTOs to
//! parameters, call the service and convert the result back into a DTO. They hold
//! no business rules.

pub mod auth;
pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod payment;
pub mod report;
pub mod review;
pub mod student;
pub mod sub_category;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::util::pagination::{PageRequest, DEFAULT_PAGE_SIZE};

/// Query parameters accepted by every paginated listing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number (default: 1)
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn into_request(self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}
