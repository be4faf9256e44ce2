//! Enrollment lifecycle and lesson progress.

use entity::enrollment::EnrollmentStatus;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        course::CourseRepository, enrollment::EnrollmentRepository, lesson::LessonRepository,
        lesson_completion::LessonCompletionRepository, payment::PaymentRepository,
        student::StudentRepository,
    },
    error::{domain::DomainError, AppError},
    model::{
        enrollment::{Enrollment, Progress},
        pagination::Paginated,
        payment::Payment,
    },
    util::{
        math::{is_finished, progress_ratio},
        pagination::PageRequest,
    },
};

pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a student in a course they have purchased.
    ///
    /// Checks run in order and the first failure wins: the student must exist, the
    /// course must exist, the student must not already be enrolled, and one of the
    /// student's APPROVED payments must cover the course. An integrity failure while
    /// saving is reported as `UnknownError`.
    ///
    /// # Arguments
    /// - `student_id` - Authenticated caller
    /// - `course_id` - Course to enroll in
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - New enrollment with status ENROLLED
    /// - `Err(AppError::Domain(_))` - STUDENT_NOT_FOUND, COURSE_NOT_FOUND, ENROLLMENT_EXIST,
    ///   COURSE_NOT_PURCHASED or UNKNOWN_ERROR
    pub async fn create(&self, student_id: i32, course_id: i32) -> Result<Enrollment, AppError> {
        let student_repo = StudentRepository::new(self.db);
        let course_repo = CourseRepository::new(self.db);
        let payment_repo = PaymentRepository::new(self.db);
        let repo = EnrollmentRepository::new(self.db);

        if student_repo.find_by_id(student_id).await?.is_none() {
            return Err(DomainError::StudentNotFound.into());
        }

        if course_repo.find_by_id(course_id).await?.is_none() {
            return Err(DomainError::CourseNotFound.into());
        }

        if repo
            .find_by_student_and_course(student_id, course_id)
            .await?
            .is_some()
        {
            return Err(DomainError::EnrollmentExist.into());
        }

        let approved = payment_repo.get_approved_by_student(student_id).await?;
        if !covers_course(&approved, course_id) {
            tracing::warn!(
                "Student {} tried to enroll in unpurchased course {}",
                student_id,
                course_id
            );
            return Err(DomainError::CourseNotPurchased.into());
        }

        let enrollment = repo
            .create(student_id, course_id)
            .await
            .map_err(insert_error)?;

        tracing::info!(
            "Student {} enrolled in course {} (enrollment {})",
            student_id,
            course_id,
            enrollment.id
        );

        Ok(enrollment)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Enrollment, AppError> {
        let repo = EnrollmentRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::EnrollmentNotFound.into())
    }

    /// Gets a student's enrollment in a course
    pub async fn get_for_student_and_course(
        &self,
        student_id: i32,
        course_id: i32,
    ) -> Result<Enrollment, AppError> {
        let repo = EnrollmentRepository::new(self.db);

        repo.find_by_student_and_course(student_id, course_id)
            .await?
            .ok_or_else(|| DomainError::EnrollmentNotFound.into())
    }

    pub async fn get_paginated(
        &self,
        page: PageRequest,
    ) -> Result<Paginated<Enrollment>, AppError> {
        let repo = EnrollmentRepository::new(self.db);

        let (enrollments, total) = repo.get_paginated(page.index(), page.page_size).await?;

        Ok(page.paginate(enrollments, total))
    }

    pub async fn get_by_student_paginated(
        &self,
        student_id: i32,
        page: PageRequest,
    ) -> Result<Paginated<Enrollment>, AppError> {
        let repo = EnrollmentRepository::new(self.db);

        let (enrollments, total) = repo
            .get_by_student_paginated(student_id, page.index(), page.page_size)
            .await?;

        Ok(page.paginate(enrollments, total))
    }

    /// Ratio of lessons completed by an enrollment to the lessons of a course.
    ///
    /// Returns 0.0 when the course has no lessons. The ratio is not capped, so it
    /// exceeds 1.0 when more completions than lessons are recorded.
    pub async fn get_process(&self, enrollment_id: i32, course_id: i32) -> Result<f64, AppError> {
        let (completed, total) = self.lesson_counts(enrollment_id, course_id).await?;

        Ok(progress_ratio(completed, total))
    }

    /// Gets the lesson progress of an enrollment against its own course
    pub async fn get_progress(&self, enrollment_id: i32) -> Result<Progress, AppError> {
        let enrollment = self.get_by_id(enrollment_id).await?;

        self.progress_of(&enrollment).await
    }

    /// Marks a lesson completed for the caller's enrollment.
    ///
    /// The enrollment must belong to `student_id` and the lesson must belong to the
    /// enrollment's course. Completing a lesson twice is a no-op. Once every lesson
    /// is completed the enrollment becomes COMPLETED.
    ///
    /// # Returns
    /// - `Ok(Progress)` - Progress after recording the completion
    /// - `Err(AppError::Domain(EnrollmentNotFound))` - Missing or owned by another student
    /// - `Err(AppError::Domain(LessonNotFound))` - Missing or part of another course
    pub async fn complete_lesson(
        &self,
        student_id: i32,
        enrollment_id: i32,
        lesson_id: i32,
    ) -> Result<Progress, AppError> {
        let repo = EnrollmentRepository::new(self.db);
        let lesson_repo = LessonRepository::new(self.db);
        let completion_repo = LessonCompletionRepository::new(self.db);

        let enrollment = match repo.find_by_id(enrollment_id).await? {
            Some(enrollment) if enrollment.student_id == student_id => enrollment,
            _ => return Err(DomainError::EnrollmentNotFound.into()),
        };

        match lesson_repo.find_by_id(lesson_id).await? {
            Some(lesson) if lesson.course_id == enrollment.course_id => {}
            _ => return Err(DomainError::LessonNotFound.into()),
        }

        if completion_repo.complete(enrollment.id, lesson_id).await? {
            tracing::info!(
                "Enrollment {} completed lesson {}",
                enrollment.id,
                lesson_id
            );
        }

        let progress = self.progress_of(&enrollment).await?;

        if enrollment.status == EnrollmentStatus::Enrolled
            && is_finished(progress.completed_lessons, progress.total_lessons)
        {
            repo.set_status(enrollment.id, EnrollmentStatus::Completed)
                .await?;
            tracing::info!("Enrollment {} completed its course", enrollment.id);
        }

        Ok(progress)
    }

    async fn progress_of(&self, enrollment: &Enrollment) -> Result<Progress, AppError> {
        let (completed, total) = self
            .lesson_counts(enrollment.id, enrollment.course_id)
            .await?;

        Ok(Progress {
            enrollment_id: enrollment.id,
            course_id: enrollment.course_id,
            completed_lessons: completed,
            total_lessons: total,
        })
    }

    /// `(completed lessons of the enrollment, total lessons of the course)`
    pub async fn lesson_counts(
        &self,
        enrollment_id: i32,
        course_id: i32,
    ) -> Result<(u64, u64), AppError> {
        let lesson_repo = LessonRepository::new(self.db);
        let completion_repo = LessonCompletionRepository::new(self.db);

        let completed = completion_repo.count_by_enrollment(enrollment_id).await?;
        let total = lesson_repo.count_by_course(course_id).await?;

        Ok((completed, total))
    }
}

/// Whether any detail row of the approved payments references the course
fn covers_course(approved: &[Payment], course_id: i32) -> bool {
    approved
        .iter()
        .flat_map(|payment| payment.details.iter())
        .any(|detail| detail.course_id == course_id)
}

/// Re-labels integrity failures raised while saving an enrollment
fn insert_error(err: DbErr) -> AppError {
    if err.sql_err().is_some() {
        tracing::warn!("Enrollment insert rejected by the database: {}", err);
        DomainError::UnknownError.into()
    } else {
        err.into()
    }
}
