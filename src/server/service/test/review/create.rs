use super::*;

/// Tests reviewing a finished course.
///
/// Expected: Ok with the review stored
#[tokio::test]
async fn creates_review_for_finished_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;
    let lessons = factory::create_lessons(db, course.id, 2).await?;
    factory::helpers::complete_lessons(db, enrollment.id, &lessons, 2).await?;

    let review = ReviewService::new(db)
        .create(review_params(student.id, course.id, 5))
        .await?;

    assert_eq!(review.student_id, student.id);
    assert_eq!(review.course_id, course.id);
    assert_eq!(review.rating, 5);

    Ok(())
}

/// Tests reviewing a course with lessons left.
///
/// Expected: Err(CourseNotFinished)
#[tokio::test]
async fn rejects_unfinished_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;
    let lessons = factory::create_lessons(db, course.id, 3).await?;
    factory::helpers::complete_lessons(db, enrollment.id, &lessons, 2).await?;

    let result = ReviewService::new(db)
        .create(review_params(student.id, course.id, 4))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::CourseNotFinished))
    ));

    Ok(())
}

/// Tests reviewing a course the student never enrolled in.
///
/// Expected: Err(CourseNotFinished)
#[tokio::test]
async fn rejects_student_without_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let student = factory::create_student(db).await?;

    let result = ReviewService::new(db)
        .create(review_params(student.id, course.id, 4))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::CourseNotFinished))
    ));

    Ok(())
}

/// Tests reviewing the same course twice.
///
/// Expected: Err(ReviewExist)
#[tokio::test]
async fn rejects_second_review() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = factory::helpers::create_enrolled_student(db).await?;

    let service = ReviewService::new(db);
    service
        .create(review_params(student.id, course.id, 5))
        .await?;
    let result = service.create(review_params(student.id, course.id, 3)).await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::ReviewExist))
    ));

    Ok(())
}

/// Tests ratings outside 1..=5.
///
/// Verifies that the rating is validated before anything is looked up, so even an
/// unknown student gets the rating error.
///
/// Expected: Err(InvalidRating) for 0 and 6
#[tokio::test]
async fn rejects_out_of_range_rating() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReviewService::new(db);

    for rating in [0, 6] {
        let result = service.create(review_params(999, 999, rating)).await;
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::InvalidRating))
        ));
    }

    Ok(())
}
