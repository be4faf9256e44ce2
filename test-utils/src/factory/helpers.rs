//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique names
/// and emails, preventing collisions with unique columns.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category and a course inside it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((category, course))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::course::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let course = crate::factory::course::create_course(db, category.id).await?;

    Ok((category, course))
}

/// Creates a student who has bought a course and is enrolled in it.
///
/// This creates:
/// 1. Category and Course
/// 2. Student
/// 3. Approved Payment covering the course
/// 4. Enrollment with status ENROLLED
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((student, course, enrollment))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_enrolled_student(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::student::Model,
        entity::course::Model,
        entity::enrollment::Model,
    ),
    DbErr,
> {
    let (_, course) = create_course_with_category(db).await?;
    let student = crate::factory::student::create_student(db).await?;
    crate::factory::payment::create_approved_payment(db, student.id, &[course.id]).await?;
    let enrollment = crate::factory::enrollment::create_enrollment(db, student.id, course.id).await?;

    Ok((student, course, enrollment))
}

/// Marks the first `count` of the given lessons as completed for an enrollment.
///
/// # Arguments
/// - `db` - Database connection
/// - `enrollment_id` - Enrollment the completions belong to
/// - `lessons` - Lessons to draw from, in order
/// - `count` - How many lessons to complete
///
/// # Returns
/// - `Ok(())` - Completions inserted
/// - `Err(DbErr)` - Database error during insert
pub async fn complete_lessons(
    db: &DatabaseConnection,
    enrollment_id: i32,
    lessons: &[entity::lesson::Model],
    count: usize,
) -> Result<(), DbErr> {
    for lesson in lessons.iter().take(count) {
        crate::factory::lesson_completion::create_lesson_completion(db, enrollment_id, lesson.id)
            .await?;
    }

    Ok(())
}
