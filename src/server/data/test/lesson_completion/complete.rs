use super::*;

/// Tests recording a lesson completion.
///
/// Expected: Ok(true) and the lesson counts as completed
#[tokio::test]
async fn records_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;

    let repo = LessonCompletionRepository::new(db);

    assert!(!repo.is_completed(enrollment.id, lesson.id).await?);
    assert!(repo.complete(enrollment.id, lesson.id).await?);
    assert!(repo.is_completed(enrollment.id, lesson.id).await?);
    assert_eq!(repo.count_by_enrollment(enrollment.id).await?, 1);

    Ok(())
}

/// Tests completing the same lesson twice.
///
/// Verifies that the second call inserts nothing and the count stays at one.
///
/// Expected: Ok(false) on the second call
#[tokio::test]
async fn ignores_repeated_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;

    let repo = LessonCompletionRepository::new(db);

    assert!(repo.complete(enrollment.id, lesson.id).await?);
    assert!(!repo.complete(enrollment.id, lesson.id).await?);
    assert_eq!(repo.count_by_enrollment(enrollment.id).await?, 1);

    Ok(())
}

/// Tests counting completions and lessons side by side.
///
/// Expected: 2 completions out of 3 lessons
#[tokio::test]
async fn counts_completions_against_lessons() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, enrollment) = factory::helpers::create_enrolled_student(db).await?;
    let lessons = factory::create_lessons(db, course.id, 3).await?;
    factory::helpers::complete_lessons(db, enrollment.id, &lessons, 2).await?;

    let completion_repo = LessonCompletionRepository::new(db);
    let lesson_repo = LessonRepository::new(db);

    assert_eq!(completion_repo.count_by_enrollment(enrollment.id).await?, 2);
    assert_eq!(lesson_repo.count_by_course(course.id).await?, 3);

    Ok(())
}
