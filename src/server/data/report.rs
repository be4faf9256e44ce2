use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::report::{Report, ReportFields};

pub struct ReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a report stamped with the current time
    pub async fn create(&self, fields: ReportFields) -> Result<Report, DbErr> {
        let report = entity::report::ActiveModel {
            course_id: ActiveValue::Set(fields.course_id),
            student_id: ActiveValue::Set(fields.student_id),
            content: ActiveValue::Set(fields.content),
            sent_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Report::from_entity(report))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Report>, DbErr> {
        let report = entity::prelude::Report::find_by_id(id).one(self.db).await?;

        Ok(report.map(Report::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Report>, DbErr> {
        let reports = entity::prelude::Report::find()
            .order_by_desc(entity::report::Column::Id)
            .all(self.db)
            .await?;

        Ok(reports.into_iter().map(Report::from_entity).collect())
    }

    /// Overwrites course, student and content, returning None when the report doesn't exist
    pub async fn update(&self, id: i32, fields: ReportFields) -> Result<Option<Report>, DbErr> {
        let Some(report) = entity::prelude::Report::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::report::ActiveModel = report.into();
        active_model.course_id = ActiveValue::Set(fields.course_id);
        active_model.student_id = ActiveValue::Set(fields.student_id);
        active_model.content = ActiveValue::Set(fields.content);

        let report = active_model.update(self.db).await?;

        Ok(Some(Report::from_entity(report)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Report::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
