use super::*;

/// Tests progress of an enrollment in a course without lessons.
///
/// Expected: Ok(0.0)
#[tokio::test]
async fn reports_zero_without_lessons() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;

    let service = EnrollmentService::new(db);
    let process = service.get_process(enrollment.id, course.id).await?;

    assert_eq!(process, 0.0);

    Ok(())
}

/// Tests progress after completing some lessons.
///
/// Expected: Ok(0.5) for 2 of 4 lessons
#[tokio::test]
async fn reports_ratio_of_completed_lessons() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;
    let lessons = factory::create_lessons(db, course.id, 4).await?;
    factory::helpers::complete_lessons(db, enrollment.id, &lessons, 2).await?;

    let service = EnrollmentService::new(db);

    assert_eq!(service.get_process(enrollment.id, course.id).await?, 0.5);

    let progress = service.get_progress(enrollment.id).await?;
    assert_eq!(progress.completed_lessons, 2);
    assert_eq!(progress.total_lessons, 4);

    Ok(())
}

/// Tests that progress is not capped when lessons leave the course after completion.
///
/// Three lessons are completed, then one lesson is moved to another course while
/// its completion is kept, leaving 3 completions against 2 lessons.
///
/// Expected: Ok(1.5)
#[tokio::test]
async fn does_not_cap_progress() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;
    let lessons = factory::create_lessons(db, course.id, 2).await?;
    let extra = factory::create_lessons(db, course.id, 1).await?;
    factory::helpers::complete_lessons(db, enrollment.id, &lessons, 2).await?;
    factory::create_lesson_completion(db, enrollment.id, extra[0].id).await?;

    // Move the extra lesson out of the course, keeping its completion row
    let other_course = factory::create_course(db, course.category_id).await?;
    let mut moved: entity::lesson::ActiveModel = extra[0].clone().into();
    moved.course_id = sea_orm::ActiveValue::Set(other_course.id);
    sea_orm::ActiveModelTrait::update(moved, db).await?;

    let process = EnrollmentService::new(db)
        .get_process(enrollment.id, course.id)
        .await?;

    assert_eq!(process, 1.5);

    Ok(())
}

/// Tests progress of an unknown enrollment.
///
/// Expected: Err(EnrollmentNotFound)
#[tokio::test]
async fn rejects_unknown_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EnrollmentService::new(db).get_progress(999).await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::EnrollmentNotFound))
    ));

    Ok(())
}
