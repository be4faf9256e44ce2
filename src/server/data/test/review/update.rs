use super::*;

/// Tests overwriting a review.
///
/// Expected: Ok with new rating and comment
#[tokio::test]
async fn updates_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = factory::helpers::create_enrolled_student(db).await?;
    let review = factory::create_review(db, student.id, course.id).await?;

    let repo = ReviewRepository::new(db);
    let updated = repo.update(review.id, 2, "Changed my mind".to_string()).await?;

    assert_eq!(updated.id, review.id);
    assert_eq!(updated.rating, 2);
    assert_eq!(updated.comment, "Changed my mind");

    Ok(())
}

/// Tests listing a course's reviews.
///
/// Expected: Ok with reviews of the course only
#[tokio::test]
async fn lists_reviews_of_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = factory::helpers::create_enrolled_student(db).await?;
    let (other_student, other_course, _) = factory::helpers::create_enrolled_student(db).await?;
    factory::create_review(db, student.id, course.id).await?;
    factory::create_review(db, other_student.id, other_course.id).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_by_course(course.id).await?;

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].course_id, course.id);

    Ok(())
}
