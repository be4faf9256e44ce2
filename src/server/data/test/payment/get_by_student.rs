use super::*;

/// Tests loading a student's payments with their details.
///
/// Expected: Ok with only the student's payments, newest first
#[tokio::test]
async fn loads_student_payments_with_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let first = factory::create_course(db, category.id).await?;
    let second = factory::create_course(db, category.id).await?;
    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;

    let older = factory::create_approved_payment(db, student.id, &[first.id]).await?;
    let newer =
        factory::create_approved_payment(db, student.id, &[first.id, second.id]).await?;
    factory::create_approved_payment(db, other.id, &[second.id]).await?;

    let repo = PaymentRepository::new(db);
    let payments = repo.get_by_student(student.id).await?;

    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].id, newer.id);
    assert_eq!(payments[0].details.len(), 2);
    assert_eq!(payments[1].id, older.id);
    assert_eq!(payments[1].details.len(), 1);

    Ok(())
}

/// Tests that only APPROVED payments count as purchases.
///
/// Expected: Ok with the approved payment only
#[tokio::test]
async fn filters_approved_payments() -> Result<(), DbErr> {
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
    factory::payment::PaymentFactory::new(db, student.id)
        .status(PaymentStatus::Rejected)
        .courses(vec![course.id])
        .build()
        .await?;
    let approved = factory::create_approved_payment(db, student.id, &[course.id]).await?;

    let repo = PaymentRepository::new(db);
    let payments = repo.get_approved_by_student(student.id).await?;

    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].id, approved.id);
    assert_eq!(payments[0].status, PaymentStatus::Approved);

    Ok(())
}
