use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::CategoryRepository, course::CourseRepository,
        enrollment::EnrollmentRepository, review::ReviewRepository,
        sub_category::SubCategoryRepository,
    },
    error::{domain::DomainError, AppError},
    model::{
        course::{
            CompletionRate, Course, CourseFields, CourseRating, CreateCourseParams,
            UpdateCourseParams,
        },
        pagination::Paginated,
        review::Review,
    },
    service::enrollment::EnrollmentService,
    util::{
        math::{completion_rate, round_two_decimals},
        pagination::PageRequest,
    },
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a course in an existing category and optional sub-category
    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, AppError> {
        self.check_classification(&params.fields).await?;

        let repo = CourseRepository::new(self.db);
        let course = repo.create(params.fields).await?;

        tracing::info!("Created course {}", course.id);

        Ok(course)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Course, AppError> {
        let repo = CourseRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::CourseNotFound.into())
    }

    pub async fn get_paginated(&self, page: PageRequest) -> Result<Paginated<Course>, AppError> {
        let repo = CourseRepository::new(self.db);

        let (courses, total) = repo.get_paginated(page.index(), page.page_size).await?;

        Ok(page.paginate(courses, total))
    }

    /// Overwrites every editable field of a course
    pub async fn update(&self, params: UpdateCourseParams) -> Result<Course, AppError> {
        let repo = CourseRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(DomainError::CourseNotFound.into());
        }

        self.check_classification(&params.fields).await?;

        repo.update(params.id, params.fields)
            .await?
            .ok_or_else(|| DomainError::CourseNotFound.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CourseRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(DomainError::CourseNotFound.into());
        }

        tracing::info!("Deleted course {}", id);

        Ok(())
    }

    /// Gets the reviews written for a course
    pub async fn get_reviews(&self, id: i32) -> Result<Vec<Review>, AppError> {
        self.get_by_id(id).await?;

        let review_repo = ReviewRepository::new(self.db);

        Ok(review_repo.get_by_course(id).await?)
    }

    /// Average rating over a course's reviews, 0.0 when it has none
    pub async fn get_rating(&self, id: i32) -> Result<CourseRating, AppError> {
        let reviews = self.get_reviews(id).await?;

        let review_count = reviews.len() as u64;
        let average_rating = if reviews.is_empty() {
            0.0
        } else {
            let sum: i64 = reviews.iter().map(|r| r.rating as i64).sum();
            round_two_decimals(sum as f64 / review_count as f64)
        };

        Ok(CourseRating {
            course_id: id,
            average_rating,
            review_count,
        })
    }

    /// Percentage of the course's enrollments that completed every lesson.
    ///
    /// Progress is recomputed for each enrollment against the current lesson count;
    /// a course without enrollments has a rate of 0.0.
    pub async fn get_completion_rate(&self, id: i32) -> Result<CompletionRate, AppError> {
        self.get_by_id(id).await?;

        let enrollment_repo = EnrollmentRepository::new(self.db);
        let enrollment_service = EnrollmentService::new(self.db);

        let enrollments = enrollment_repo.get_by_course(id).await?;

        let mut progress = Vec::with_capacity(enrollments.len());
        for enrollment in &enrollments {
            progress.push(enrollment_service.get_process(enrollment.id, id).await?);
        }

        Ok(CompletionRate {
            course_id: id,
            completion_rate: completion_rate(&progress),
        })
    }

    /// Ensures the category exists and the sub-category, when given, belongs to it
    async fn check_classification(&self, fields: &CourseFields) -> Result<(), AppError> {
        let category_repo = CategoryRepository::new(self.db);
        let sub_category_repo = SubCategoryRepository::new(self.db);

        if category_repo.find_by_id(fields.category_id).await?.is_none() {
            return Err(DomainError::CategoryNotFound.into());
        }

        if let Some(sub_category_id) = fields.sub_category_id {
            match sub_category_repo.find_by_id(sub_category_id).await? {
                Some(sub) if sub.category_id == fields.category_id => {}
                _ => return Err(DomainError::SubCategoryNotFound.into()),
            }
        }

        Ok(())
    }
}
