use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        course::CourseRepository, enrollment::EnrollmentRepository, review::ReviewRepository,
        student::StudentRepository,
    },
    error::{
        domain::{on_unique_violation, DomainError},
        AppError,
    },
    model::review::{is_valid_rating, CreateReviewParams, Review, UpdateReviewParams},
    service::enrollment::EnrollmentService,
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review for a course the student has finished.
    ///
    /// The rating must lie in 1..=5. The student and course must exist, the student
    /// must be enrolled and have completed every lesson, and must not have reviewed
    /// the course before.
    ///
    /// # Returns
    /// - `Ok(Review)` - Created review
    /// - `Err(AppError::Domain(_))` - INVALID_RATING, STUDENT_NOT_FOUND, COURSE_NOT_FOUND,
    ///   COURSE_NOT_FINISHED or REVIEW_EXIST
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        let student_repo = StudentRepository::new(self.db);
        let course_repo = CourseRepository::new(self.db);
        let enrollment_repo = EnrollmentRepository::new(self.db);
        let repo = ReviewRepository::new(self.db);

        if !is_valid_rating(params.rating) {
            return Err(DomainError::InvalidRating.into());
        }

        if student_repo.find_by_id(params.student_id).await?.is_none() {
            return Err(DomainError::StudentNotFound.into());
        }

        if course_repo.find_by_id(params.course_id).await?.is_none() {
            return Err(DomainError::CourseNotFound.into());
        }

        let Some(enrollment) = enrollment_repo
            .find_by_student_and_course(params.student_id, params.course_id)
            .await?
        else {
            return Err(DomainError::CourseNotFinished.into());
        };

        let (completed, total) = EnrollmentService::new(self.db)
            .lesson_counts(enrollment.id, params.course_id)
            .await?;
        if completed < total {
            tracing::warn!(
                "Student {} reviewed course {} after {}/{} lessons",
                params.student_id,
                params.course_id,
                completed,
                total
            );
            return Err(DomainError::CourseNotFinished.into());
        }

        if repo
            .exists_for_student_and_course(params.student_id, params.course_id)
            .await?
        {
            return Err(DomainError::ReviewExist.into());
        }

        let review = repo
            .create(params)
            .await
            .map_err(|e| on_unique_violation(e, DomainError::ReviewExist))?;

        tracing::info!(
            "Student {} reviewed course {} (review {})",
            review.student_id,
            review.course_id,
            review.id
        );

        Ok(review)
    }

    /// Overwrites rating and comment of the caller's own review.
    ///
    /// A missing review and a review owned by someone else both fail with
    /// `UnknownError`, whatever the rating. The rating is checked only once
    /// ownership is established.
    pub async fn update(&self, params: UpdateReviewParams) -> Result<Review, AppError> {
        let repo = ReviewRepository::new(self.db);

        self.find_owned(params.id, params.student_id).await?;

        if !is_valid_rating(params.rating) {
            return Err(DomainError::InvalidRating.into());
        }

        Ok(repo
            .update(params.id, params.rating, params.comment)
            .await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Review>, AppError> {
        let repo = ReviewRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Review, AppError> {
        let repo = ReviewRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::ReviewNotFound.into())
    }

    /// Deletes the caller's own review, failing like `update` otherwise
    pub async fn delete(&self, id: i32, student_id: i32) -> Result<(), AppError> {
        let repo = ReviewRepository::new(self.db);

        self.find_owned(id, student_id).await?;
        repo.delete(id).await?;

        tracing::info!("Student {} deleted review {}", student_id, id);

        Ok(())
    }

    async fn find_owned(&self, id: i32, student_id: i32) -> Result<Review, AppError> {
        let repo = ReviewRepository::new(self.db);

        match repo.find_by_id(id).await? {
            Some(review) if review.student_id == student_id => Ok(review),
            _ => Err(DomainError::UnknownError.into()),
        }
    }
}
