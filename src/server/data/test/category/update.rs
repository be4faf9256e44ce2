use super::*;

/// Tests updating an existing category.
///
/// Expected: Ok(Some) with name and description overwritten
#[tokio::test]
async fn updates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(UpdateCategoryParams {
            id: category.id,
            name: "Renamed".to_string(),
            description: "New description".to_string(),
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.id, category.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, "New description");

    Ok(())
}

/// Tests updating a category that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(UpdateCategoryParams {
            id: 999,
            name: "Ghost".to_string(),
            description: String::new(),
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
