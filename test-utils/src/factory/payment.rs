//! Payment factory for creating test payments with their detail rows.

use chrono::Utc;
use entity::payment::PaymentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a student's payment covering a set of courses.
///
/// Each course becomes one payment detail row priced at `price_per_course`.
///
/// # Example
///
/// ```rust,ignore
/// let payment = PaymentFactory::new(&db, student.id)
///     .courses(vec![course.id])
///     .status(PaymentStatus::Pending)
///     .build()
///     .await?;
/// ```
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    status: PaymentStatus,
    course_ids: Vec<i32>,
    price_per_course: f64,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory for an APPROVED payment with no courses.
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        Self {
            db,
            student_id,
            status: PaymentStatus::Approved,
            course_ids: Vec::new(),
            price_per_course: 19.99,
        }
    }

    /// Sets the payment status.
    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the courses covered by the payment.
    pub fn courses(mut self, course_ids: Vec<i32>) -> Self {
        self.course_ids = course_ids;
        self
    }

    /// Builds and inserts the payment and its detail rows.
    ///
    /// # Returns
    /// - `Ok(entity::payment::Model)` - Created payment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        let payment = entity::payment::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            status: ActiveValue::Set(self.status),
            total: ActiveValue::Set(self.price_per_course * self.course_ids.len() as f64),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for course_id in self.course_ids {
            entity::payment_detail::ActiveModel {
                payment_id: ActiveValue::Set(payment.id),
                course_id: ActiveValue::Set(course_id),
                price: ActiveValue::Set(self.price_per_course),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(payment)
    }
}

/// Creates an APPROVED payment by the student covering the given courses.
pub async fn create_approved_payment(
    db: &DatabaseConnection,
    student_id: i32,
    course_ids: &[i32],
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, student_id)
        .courses(course_ids.to_vec())
        .build()
        .await
}
