use super::*;

/// Tests the completion rate over several enrollments.
///
/// Three students progress 3/3, 3/3 and 0/3 through the course, so two of the
/// three enrollments are finished.
///
/// Expected: Ok(66.67)
#[tokio::test]
async fn counts_finished_enrollments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let lessons = factory::create_lessons(db, course.id, 3).await?;

    for completed in [3, 3, 0] {
        let student = factory::create_student(db).await?;
        let enrollment = factory::create_enrollment(db, student.id, course.id).await?;
        factory::helpers::complete_lessons(db, enrollment.id, &lessons, completed).await?;
    }

    let rate = CourseService::new(db).get_completion_rate(course.id).await?;

    assert_eq!(rate.course_id, course.id);
    assert_eq!(rate.completion_rate, 66.67);

    Ok(())
}

/// Tests the completion rate of a course nobody enrolled in.
///
/// Expected: Ok(0.0)
#[tokio::test]
async fn reports_zero_rate_without_enrollments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    factory::create_lessons(db, course.id, 2).await?;

    let rate = CourseService::new(db).get_completion_rate(course.id).await?;

    assert_eq!(rate.completion_rate, 0.0);

    Ok(())
}

/// Tests the average rating of a course.
///
/// Expected: Ok with average 4.5 over 2 reviews
#[tokio::test]
async fn averages_ratings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    for rating in [4, 5] {
        let student = factory::create_student(db).await?;
        factory::review::ReviewFactory::new(db, student.id, course.id)
            .rating(rating)
            .build()
            .await?;
    }

    let rating = CourseService::new(db).get_rating(course.id).await?;

    assert_eq!(rating.review_count, 2);
    assert_eq!(rating.average_rating, 4.5);

    Ok(())
}

/// Tests statistics of an unknown course.
///
/// Expected: Err(CourseNotFound)
#[tokio::test]
async fn rejects_unknown_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CourseService::new(db);

    assert!(matches!(
        service.get_rating(999).await,
        Err(AppError::Domain(DomainError::CourseNotFound))
    ));
    assert!(matches!(
        service.get_completion_rate(999).await,
        Err(AppError::Domain(DomainError::CourseNotFound))
    ));

    Ok(())
}
