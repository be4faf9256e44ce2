use chrono::Utc;
use entity::payment::PaymentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::payment::{CreatePaymentParams, Payment};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a PENDING payment with one detail row per priced course.
    ///
    /// The payment and its details are written in one transaction, so a failed detail
    /// insert leaves no payment behind.
    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, DbErr> {
        let txn = self.db.begin().await?;

        let payment = entity::payment::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            status: ActiveValue::Set(PaymentStatus::Pending),
            total: ActiveValue::Set(params.total()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut details = Vec::with_capacity(params.details.len());
        for detail in params.details {
            let detail = entity::payment_detail::ActiveModel {
                payment_id: ActiveValue::Set(payment.id),
                course_id: ActiveValue::Set(detail.course_id),
                price: ActiveValue::Set(detail.price),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            details.push(detail);
        }

        txn.commit().await?;

        Ok(Payment::from_entity(payment, details))
    }

    /// Gets a payment with its detail rows
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Payment>, DbErr> {
        let Some(payment) = entity::prelude::Payment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let details = entity::prelude::PaymentDetail::find()
            .filter(entity::payment_detail::Column::PaymentId.eq(payment.id))
            .order_by_asc(entity::payment_detail::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Payment::from_entity(payment, details)))
    }

    /// Gets a student's payments with their detail rows, newest first
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<Payment>, DbErr> {
        self.find_for_student(student_id, None).await
    }

    /// Gets a student's APPROVED payments with their detail rows
    pub async fn get_approved_by_student(&self, student_id: i32) -> Result<Vec<Payment>, DbErr> {
        self.find_for_student(student_id, Some(PaymentStatus::Approved))
            .await
    }

    async fn find_for_student(
        &self,
        student_id: i32,
        status: Option<PaymentStatus>,
    ) -> Result<Vec<Payment>, DbErr> {
        let mut query = entity::prelude::Payment::find()
            .filter(entity::payment::Column::StudentId.eq(student_id));
        if let Some(status) = status {
            query = query.filter(entity::payment::Column::Status.eq(status));
        }

        let payments = query
            .order_by_desc(entity::payment::Column::Id)
            .find_with_related(entity::prelude::PaymentDetail)
            .all(self.db)
            .await?;

        Ok(payments
            .into_iter()
            .map(|(payment, details)| Payment::from_entity(payment, details))
            .collect())
    }

    /// Sets the status of a payment, returning None when it doesn't exist
    pub async fn update_status(
        &self,
        id: i32,
        status: PaymentStatus,
    ) -> Result<Option<Payment>, DbErr> {
        let Some(payment) = entity::prelude::Payment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::payment::ActiveModel = payment.into();
        active_model.status = ActiveValue::Set(status);
        active_model.update(self.db).await?;

        self.find_by_id(id).await
    }
}
