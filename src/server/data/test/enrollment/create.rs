use super::*;

/// Tests creating an enrollment.
///
/// Verifies that a new enrollment starts ENROLLED and carries the generated
/// description.
///
/// Expected: Ok with status Enrolled
#[tokio::test]
async fn creates_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let student = factory::create_student(db).await?;

    let repo = EnrollmentRepository::new(db);
    let enrollment = repo.create(student.id, course.id).await?;

    assert_eq!(enrollment.student_id, student.id);
    assert_eq!(enrollment.course_id, course.id);
    assert_eq!(enrollment.status, EnrollmentStatus::Enrolled);
    assert_eq!(
        enrollment.description,
        format!("Student {} enrolled in course {}", student.id, course.id)
    );

    Ok(())
}

/// Tests the one-enrollment-per-student-and-course constraint.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = factory::helpers::create_enrolled_student(db).await?;

    let repo = EnrollmentRepository::new(db);
    let result = repo.create(student.id, course.id).await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}

/// Tests looking up an enrollment by student and course.
///
/// Expected: Some for the enrolled pair, None for another course
#[tokio::test]
async fn finds_by_student_and_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;
    let other_course = factory::create_course(db, course.category_id).await?;

    let repo = EnrollmentRepository::new(db);

    let found = repo.find_by_student_and_course(student.id, course.id).await?;
    assert_eq!(found.map(|e| e.id), Some(enrollment.id));

    let missing = repo
        .find_by_student_and_course(student.id, other_course.id)
        .await?;
    assert!(missing.is_none());

    Ok(())
}
