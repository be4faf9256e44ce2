use super::*;

/// Tests deleting a lesson, then deleting it again.
///
/// Expected: Ok(()), then Err(LessonNotFound) for both lookup and second delete
#[tokio::test]
async fn deletes_lesson_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;

    let service = LessonService::new(db);
    service.delete(lesson.id).await?;

    assert!(matches!(
        service.get_by_id(lesson.id).await,
        Err(AppError::Domain(DomainError::LessonNotFound))
    ));
    assert!(matches!(
        service.delete(lesson.id).await,
        Err(AppError::Domain(DomainError::LessonNotFound))
    ));

    Ok(())
}
