use super::*;

/// Tests renaming a category to a name another category holds.
///
/// Expected: Err(CategoryExist) and the category keeps its name
#[tokio::test]
async fn rejects_renaming_category_to_taken_name() -> Result<(), AppError> {
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
    let category = factory::create_category(db).await?;

    let service = CategoryService::new(db);
    let result = service
        .update(UpdateCategoryParams {
            id: category.id,
            name: "Design".to_string(),
            description: String::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::CategoryExist))
    ));
    assert_eq!(service.get_by_id(category.id).await?.name, category.name);

    Ok(())
}

/// Tests updating a category that does not exist.
///
/// Expected: Err(CategoryNotFound)
#[tokio::test]
async fn rejects_updating_missing_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CategoryService::new(db)
        .update(UpdateCategoryParams {
            id: 999,
            name: "Ghost".to_string(),
            description: String::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::CategoryNotFound))
    ));

    Ok(())
}

/// Tests renaming a sub-category to a name another sub-category holds.
///
/// Expected: Err(SubCategoryExist)
#[tokio::test]
async fn rejects_renaming_sub_category_to_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::sub_category::SubCategoryFactory::new(db, category.id)
        .name("Mobile")
        .build()
        .await?;
    let sub_category = factory::create_sub_category(db, category.id).await?;

    let result = SubCategoryService::new(db)
        .update(UpdateSubCategoryParams {
            id: sub_category.id,
            name: "Mobile".to_string(),
            description: String::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::SubCategoryExist))
    ));

    Ok(())
}

/// Tests updating a sub-category that does not exist.
///
/// Expected: Err(SubCategoryNotFound)
#[tokio::test]
async fn rejects_updating_missing_sub_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SubCategoryService::new(db)
        .update(UpdateSubCategoryParams {
            id: 999,
            name: "Ghost".to_string(),
            description: String::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::SubCategoryNotFound))
    ));

    Ok(())
}
