use super::*;

/// Tests paginating a student's enrollments.
///
/// Verifies that pages are zero-based, sorted newest first, and that the total
/// counts every enrollment of the student only.
///
/// Expected: Ok with 2 items on page 0, 1 on page 1, total 3
#[tokio::test]
async fn paginates_student_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;

    let mut enrollment_ids = Vec::new();
    for _ in 0..3 {
        let course = factory::create_course(db, category.id).await?;
        let enrollment = factory::create_enrollment(db, student.id, course.id).await?;
        enrollment_ids.push(enrollment.id);
        factory::create_enrollment(db, other.id, course.id).await?;
    }

    let repo = EnrollmentRepository::new(db);

    let (first_page, total) = repo.get_by_student_paginated(student.id, 0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].id, enrollment_ids[2]);
    assert_eq!(first_page[1].id, enrollment_ids[1]);

    let (second_page, total) = repo.get_by_student_paginated(student.id, 1, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].id, enrollment_ids[0]);

    Ok(())
}

/// Tests paginating every enrollment past the last page.
///
/// Expected: Ok with empty page and full total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_enrolled_student(db).await?;

    let repo = EnrollmentRepository::new(db);
    let (enrollments, total) = repo.get_paginated(5, 10).await?;

    assert!(enrollments.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
