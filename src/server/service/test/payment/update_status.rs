use super::*;

/// Tests approving a pending payment.
///
/// Expected: Ok with status Approved and the details kept
#[tokio::test]
async fn approves_pending_payment() -> Result<(), AppError> {
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
    assert_eq!(approved.details, payment.details);

    Ok(())
}

/// Tests changing the status of a payment that does not exist.
///
/// Expected: Err(PaymentNotFound)
#[tokio::test]
async fn rejects_missing_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PaymentService::new(db)
        .update_status(999, PaymentStatus::Approved)
        .await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::PaymentNotFound))
    ));

    Ok(())
}
