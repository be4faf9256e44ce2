use super::*;

/// Tests enrolling a student who bought the course.
///
/// Expected: Ok with status Enrolled
#[tokio::test]
async fn enrolls_student_with_approved_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let student = factory::create_student(db).await?;
    factory::create_approved_payment(db, student.id, &[course.id]).await?;

    let service = EnrollmentService::new(db);
    let enrollment = service.create(student.id, course.id).await?;

    assert_eq!(enrollment.student_id, student.id);
    assert_eq!(enrollment.course_id, course.id);
    assert_eq!(enrollment.status, EnrollmentStatus::Enrolled);

    Ok(())
}

/// Tests enrolling an unknown student.
///
/// Expected: Err(StudentNotFound)
#[tokio::test]
async fn rejects_unknown_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;

    let result = EnrollmentService::new(db).create(999, course.id).await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::StudentNotFound))
    ));

    Ok(())
}

/// Tests enrolling in an unknown course.
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

    let student = factory::create_student(db).await?;

    let result = EnrollmentService::new(db).create(student.id, 999).await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::CourseNotFound))
    ));

    Ok(())
}

/// Tests enrolling twice in the same course.
///
/// Verifies that the duplicate check runs before the purchase check and that no
/// second enrollment row is written.
///
/// Expected: Err(EnrollmentExist)
#[tokio::test]
async fn rejects_existing_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = factory::helpers::create_enrolled_student(db).await?;

    let service = EnrollmentService::new(db);
    let result = service.create(student.id, course.id).await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::EnrollmentExist))
    ));

    let (enrollments, total) = crate::server::data::enrollment::EnrollmentRepository::new(db)
        .get_by_student_paginated(student.id, 0, 10)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(enrollments.len(), 1);

    Ok(())
}

/// Tests enrolling without any payment.
///
/// Expected: Err(CourseNotPurchased)
#[tokio::test]
async fn rejects_student_without_payments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let student = factory::create_student(db).await?;

    let result = EnrollmentService::new(db).create(student.id, course.id).await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::CourseNotPurchased))
    ));

    Ok(())
}

/// Tests enrolling with an approved payment that has no detail rows.
///
/// Expected: Err(CourseNotPurchased)
#[tokio::test]
async fn rejects_payment_without_details() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let student = factory::create_student(db).await?;
    factory::create_approved_payment(db, student.id, &[]).await?;

    let result = EnrollmentService::new(db).create(student.id, course.id).await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::CourseNotPurchased))
    ));

    Ok(())
}

/// Tests enrolling with a payment covering a different course.
///
/// Expected: Err(CourseNotPurchased)
#[tokio::test]
async fn rejects_payment_for_other_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, course) = factory::helpers::create_course_with_category(db).await?;
    let other_course = factory::create_course(db, category.id).await?;
    let student = factory::create_student(db).await?;
    factory::create_approved_payment(db, student.id, &[other_course.id]).await?;

    let result = EnrollmentService::new(db).create(student.id, course.id).await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::CourseNotPurchased))
    ));

    Ok(())
}

/// Tests enrolling with a payment that was never approved.
///
/// Expected: Err(CourseNotPurchased)
#[tokio::test]
async fn rejects_pending_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let student = factory::create_student(db).await?;
    factory::payment::PaymentFactory::new(db, student.id)
        .status(PaymentStatus::Pending)
        .courses(vec![course.id])
        .build()
        .await?;

    let result = EnrollmentService::new(db).create(student.id, course.id).await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::CourseNotPurchased))
    ));

    Ok(())
}
