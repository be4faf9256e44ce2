use super::*;

/// Tests deleting a category.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let deleted = repo.delete(category.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(category.id).await?.is_none());

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}

/// Tests listing sub-categories scoped to their parent category.
///
/// Expected: Ok with only the sub-categories of the requested category
#[tokio::test]
async fn lists_sub_categories_of_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let other = factory::create_category(db).await?;
    let first = factory::create_sub_category(db, category.id).await?;
    let second = factory::create_sub_category(db, category.id).await?;
    factory::create_sub_category(db, other.id).await?;

    let repo = SubCategoryRepository::new(db);
    let sub_categories = repo.get_by_category(category.id).await?;

    assert_eq!(sub_categories.len(), 2);
    assert_eq!(sub_categories[0].id, second.id);
    assert_eq!(sub_categories[1].id, first.id);

    Ok(())
}
