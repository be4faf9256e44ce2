use super::*;

/// Tests overwriting a lesson's title and content.
///
/// Expected: Ok with both fields replaced and the course kept
#[tokio::test]
async fn updates_lesson() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;

    let updated = LessonService::new(db)
        .update(UpdateLessonParams {
            id: lesson.id,
            title: "Lifetimes".to_string(),
            content: "Annotating references".to_string(),
        })
        .await?;

    assert_eq!(updated.id, lesson.id);
    assert_eq!(updated.course_id, course.id);
    assert_eq!(updated.title, "Lifetimes");
    assert_eq!(updated.content, "Annotating references");

    Ok(())
}

/// Tests updating a lesson that does not exist.
///
/// Expected: Err(LessonNotFound)
#[tokio::test]
async fn rejects_updating_missing_lesson() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LessonService::new(db)
        .update(UpdateLessonParams {
            id: 999,
            title: "Ghost".to_string(),
            content: String::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::LessonNotFound))
    ));

    Ok(())
}
