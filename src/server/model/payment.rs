use chrono::{DateTime, Utc};
use entity::payment::PaymentStatus;

use crate::model::payment::{PaymentDetailDto, PaymentDto, PaymentStatusDto};

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDetail {
    pub course_id: i32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub student_id: i32,
    pub status: PaymentStatus,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub details: Vec<PaymentDetail>,
}

impl Payment {
    /// Converts a payment and its detail rows to a domain model.
    pub fn from_entity(
        entity: entity::payment::Model,
        details: Vec<entity::payment_detail::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            status: entity.status,
            total: entity.total,
            created_at: entity.created_at,
            details: details
                .into_iter()
                .map(|d| PaymentDetail {
                    course_id: d.course_id,
                    price: d.price,
                })
                .collect(),
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            student_id: self.student_id,
            status: status_into_dto(self.status),
            total: self.total,
            created_at: self.created_at,
            details: self
                .details
                .into_iter()
                .map(|d| PaymentDetailDto {
                    course_id: d.course_id,
                    price: d.price,
                })
                .collect(),
        }
    }
}

pub fn status_into_dto(status: PaymentStatus) -> PaymentStatusDto {
    match status {
        PaymentStatus::Pending => PaymentStatusDto::Pending,
        PaymentStatus::Approved => PaymentStatusDto::Approved,
        PaymentStatus::Rejected => PaymentStatusDto::Rejected,
    }
}

pub fn status_from_dto(status: PaymentStatusDto) -> PaymentStatus {
    match status {
        PaymentStatusDto::Pending => PaymentStatus::Pending,
        PaymentStatusDto::Approved => PaymentStatus::Approved,
        PaymentStatusDto::Rejected => PaymentStatus::Rejected,
    }
}

/// Parameters for a new payment, with each course already priced.
#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub student_id: i32,
    pub details: Vec<PaymentDetail>,
}

impl CreatePaymentParams {
    pub fn total(&self) -> f64 {
        self.details.iter().map(|d| d.price).sum()
    }
}
