use super::*;

/// Tests creating a new category.
///
/// Expected: Ok with category created and persisted
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            name: "Programming".to_string(),
            description: "Software development".to_string(),
        })
        .await?;

    assert_eq!(category.name, "Programming");
    assert_eq!(category.description, "Software development");

    let db_category = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?;
    assert!(db_category.is_some());

    Ok(())
}

/// Tests the unique name constraint on categories.
///
/// Verifies that inserting a second category with an existing name is rejected by
/// the database as a unique violation.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .name("Design")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let result = repo
        .create(CreateCategoryParams {
            name: "Design".to_string(),
            description: String::new(),
        })
        .await;

    assert!(result.is_err());
    assert!(crate::server::error::domain::is_unique_violation(
        &result.unwrap_err()
    ));

    Ok(())
}

/// Tests name lookup used by the duplicate pre-check.
///
/// Expected: true for an existing name, false otherwise
#[tokio::test]
async fn checks_existing_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .name("Music")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);

    assert!(repo.exists_by_name("Music").await?);
    assert!(!repo.exists_by_name("Cooking").await?);

    Ok(())
}
