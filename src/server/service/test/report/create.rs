use super::*;

/// Tests filing a report about an existing course.
///
/// Expected: Ok with the report linked to the course and student
#[tokio::test]
async fn creates_report() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let student = factory::create_student(db).await?;

    let service = ReportService::new(db);
    let report = service.create(report_fields(course.id, student.id)).await?;

    assert_eq!(report.course_id, course.id);
    assert_eq!(report.student_id, student.id);
    assert_eq!(report.content, "Lesson 3 links to a dead page");
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}

/// Tests filing a report about a course that does not exist.
///
/// Expected: Err(CourseNotFound)
#[tokio::test]
async fn rejects_report_for_missing_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let result = ReportService::new(db)
        .create(report_fields(999, student.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::CourseNotFound))
    ));

    Ok(())
}

/// Tests filing a report as a student that does not exist.
///
/// Expected: Err(StudentNotFound) and nothing stored
#[tokio::test]
async fn rejects_report_from_missing_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;

    let service = ReportService::new(db);
    let result = service.create(report_fields(course.id, 999)).await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::StudentNotFound))
    ));
    assert!(service.get_all().await?.is_empty());

    Ok(())
}
