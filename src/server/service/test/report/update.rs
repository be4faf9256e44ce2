use super::*;

/// Tests overwriting a report.
///
/// Expected: Ok with the new content stored
#[tokio::test]
async fn updates_report() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let student = factory::create_student(db).await?;
    let report = factory::create_report(db, course.id, student.id).await?;

    let service = ReportService::new(db);
    let updated = service
        .update(report.id, report_fields(course.id, student.id))
        .await?;

    assert_eq!(updated.id, report.id);
    assert_eq!(updated.content, "Lesson 3 links to a dead page");
    assert_eq!(
        service.get_by_id(report.id).await?.content,
        "Lesson 3 links to a dead page"
    );

    Ok(())
}

/// Tests updating a report that does not exist.
///
/// Expected: Err(ReportNotFound)
#[tokio::test]
async fn rejects_updating_missing_report() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let student = factory::create_student(db).await?;

    let result = ReportService::new(db)
        .update(999, report_fields(course.id, student.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::ReportNotFound))
    ));

    Ok(())
}

/// Tests moving a report onto a course that does not exist.
///
/// Expected: Err(CourseNotFound) and the report unchanged
#[tokio::test]
async fn rejects_update_to_missing_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let student = factory::create_student(db).await?;
    let report = factory::create_report(db, course.id, student.id).await?;

    let service = ReportService::new(db);
    let result = service.update(report.id, report_fields(999, student.id)).await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::CourseNotFound))
    ));
    assert_eq!(service.get_by_id(report.id).await?.course_id, course.id);

    Ok(())
}
