use super::*;

/// Tests buying two courses in one payment.
///
/// Verifies that each detail carries its course's price and the total is their sum.
///
/// Expected: Ok with status Pending and total 35.5
#[tokio::test]
async fn charges_course_prices() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let first = factory::course::CourseFactory::new(db, category.id)
        .price(15.5)
        .build()
        .await?;
    let second = factory::course::CourseFactory::new(db, category.id)
        .price(20.0)
        .build()
        .await?;
    let student = factory::create_student(db).await?;

    let payment = PaymentService::new(db)
        .create(student.id, vec![first.id, second.id])
        .await?;

    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.total, 35.5);
    assert_eq!(payment.details.len(), 2);
    assert_eq!(payment.details[0].course_id, first.id);
    assert_eq!(payment.details[0].price, 15.5);
    assert_eq!(payment.details[1].course_id, second.id);
    assert_eq!(payment.details[1].price, 20.0);

    Ok(())
}

/// Tests payments with an empty or repeated course list.
///
/// Expected: Err(InvalidPayment)
#[tokio::test]
async fn rejects_invalid_course_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let student = factory::create_student(db).await?;

    let service = PaymentService::new(db);

    let empty = service.create(student.id, vec![]).await;
    assert!(matches!(
        empty,
        Err(AppError::Domain(DomainError::InvalidPayment))
    ));

    let repeated = service.create(student.id, vec![course.id, course.id]).await;
    assert!(matches!(
        repeated,
        Err(AppError::Domain(DomainError::InvalidPayment))
    ));

    Ok(())
}

/// Tests paying for a course that does not exist.
///
/// Expected: Err(CourseNotFound) and no payment stored
#[tokio::test]
async fn rejects_unknown_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let student = factory::create_student(db).await?;

    let service = PaymentService::new(db);
    let result = service.create(student.id, vec![course.id, 999]).await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::CourseNotFound))
    ));
    assert!(service.get_by_student(student.id).await?.is_empty());

    Ok(())
}

/// Tests approving a payment unlocks enrollment.
///
/// Expected: Ok enrollment after the status moves to Approved
#[tokio::test]
async fn approved_payment_allows_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let student = factory::create_student(db).await?;

    let service = PaymentService::new(db);
    let payment = service.create(student.id, vec![course.id]).await?;
    let approved = service
        .update_status(payment.id, PaymentStatus::Approved)
        .await?;
    assert_eq!(approved.status, PaymentStatus::Approved);

    let enrollment = crate::server::service::enrollment::EnrollmentService::new(db)
        .create(student.id, course.id)
        .await?;
    assert_eq!(enrollment.course_id, course.id);

    Ok(())
}
