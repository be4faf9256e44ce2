use super::*;

/// Tests completing one lesson of several.
///
/// Expected: Ok with 1 of 2 lessons completed and status still Enrolled
#[tokio::test]
async fn records_partial_progress() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;
    let lessons = factory::create_lessons(db, course.id, 2).await?;

    let service = EnrollmentService::new(db);
    let progress = service
        .complete_lesson(student.id, enrollment.id, lessons[0].id)
        .await?;

    assert_eq!(progress.completed_lessons, 1);
    assert_eq!(progress.total_lessons, 2);
    assert_eq!(progress.ratio(), 0.5);

    let stored = service.get_by_id(enrollment.id).await?;
    assert_eq!(stored.status, EnrollmentStatus::Enrolled);

    Ok(())
}

/// Tests completing the last lesson of a course.
///
/// Expected: Ok and the enrollment becomes Completed
#[tokio::test]
async fn completes_enrollment_after_last_lesson() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;
    let lessons = factory::create_lessons(db, course.id, 2).await?;

    let service = EnrollmentService::new(db);
    service
        .complete_lesson(student.id, enrollment.id, lessons[0].id)
        .await?;
    let progress = service
        .complete_lesson(student.id, enrollment.id, lessons[1].id)
        .await?;

    assert_eq!(progress.ratio(), 1.0);

    let stored = service.get_by_id(enrollment.id).await?;
    assert_eq!(stored.status, EnrollmentStatus::Completed);

    Ok(())
}

/// Tests completing the same lesson twice.
///
/// Expected: Ok with the completed count unchanged
#[tokio::test]
async fn repeated_completion_is_a_no_op() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;
    let lessons = factory::create_lessons(db, course.id, 3).await?;

    let service = EnrollmentService::new(db);
    service
        .complete_lesson(student.id, enrollment.id, lessons[0].id)
        .await?;
    let progress = service
        .complete_lesson(student.id, enrollment.id, lessons[0].id)
        .await?;

    assert_eq!(progress.completed_lessons, 1);

    Ok(())
}

/// Tests completing a lesson through someone else's enrollment.
///
/// Expected: Err(EnrollmentNotFound)
#[tokio::test]
async fn rejects_foreign_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;
    let intruder = factory::create_student(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;

    let result = EnrollmentService::new(db)
        .complete_lesson(intruder.id, enrollment.id, lesson.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::EnrollmentNotFound))
    ));

    Ok(())
}

/// Tests completing a lesson that belongs to another course.
///
/// Expected: Err(LessonNotFound)
#[tokio::test]
async fn rejects_lesson_of_other_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;
    let other_course = factory::create_course(db, course.category_id).await?;
    let lesson = factory::create_lesson(db, other_course.id).await?;

    let result = EnrollmentService::new(db)
        .complete_lesson(student.id, enrollment.id, lesson.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::LessonNotFound))
    ));

    Ok(())
}
