use std::collections::{HashMap, HashSet};

use entity::payment::PaymentStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        course::CourseRepository, payment::PaymentRepository, student::StudentRepository,
    },
    error::{domain::DomainError, AppError},
    model::payment::{CreatePaymentParams, Payment, PaymentDetail},
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a PENDING payment by a student for a set of courses.
    ///
    /// Each course is charged at its current price and the total is their sum.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Created payment with its detail rows
    /// - `Err(AppError::Domain(InvalidPayment))` - Empty or repeated course ids
    /// - `Err(AppError::Domain(StudentNotFound))` - Unknown student
    /// - `Err(AppError::Domain(CourseNotFound))` - Any course id is unknown
    pub async fn create(&self, student_id: i32, course_ids: Vec<i32>) -> Result<Payment, AppError> {
        let student_repo = StudentRepository::new(self.db);
        let course_repo = CourseRepository::new(self.db);
        let repo = PaymentRepository::new(self.db);

        let distinct: HashSet<i32> = course_ids.iter().copied().collect();
        if course_ids.is_empty() || distinct.len() != course_ids.len() {
            return Err(DomainError::InvalidPayment.into());
        }

        if student_repo.find_by_id(student_id).await?.is_none() {
            return Err(DomainError::StudentNotFound.into());
        }

        let prices: HashMap<i32, f64> = course_repo
            .find_by_ids(&course_ids)
            .await?
            .into_iter()
            .map(|course| (course.id, course.price))
            .collect();

        let details = course_ids
            .into_iter()
            .map(|course_id| {
                prices
                    .get(&course_id)
                    .map(|&price| PaymentDetail { course_id, price })
                    .ok_or(DomainError::CourseNotFound)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let payment = repo
            .create(CreatePaymentParams {
                student_id,
                details,
            })
            .await?;

        tracing::info!(
            "Created payment {} for student {} totalling {:.2}",
            payment.id,
            student_id,
            payment.total
        );

        Ok(payment)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Payment, AppError> {
        let repo = PaymentRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::PaymentNotFound.into())
    }

    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<Payment>, AppError> {
        let repo = PaymentRepository::new(self.db);

        Ok(repo.get_by_student(student_id).await?)
    }

    /// Sets the status of a payment; only APPROVED payments count as purchases
    pub async fn update_status(&self, id: i32, status: PaymentStatus) -> Result<Payment, AppError> {
        let repo = PaymentRepository::new(self.db);

        let payment = repo
            .update_status(id, status)
            .await?
            .ok_or(DomainError::PaymentNotFound)?;

        tracing::info!("Payment {} is now {:?}", id, status);

        Ok(payment)
    }
}
