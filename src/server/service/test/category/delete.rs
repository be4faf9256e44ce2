use super::*;

/// Tests deleting an existing category and then deleting it again.
///
/// Expected: Ok(true), then Ok(false) once the row is gone
#[tokio::test]
async fn deletes_category_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let service = CategoryService::new(db);

    assert!(service.delete(category.id).await?);
    assert!(!service.delete(category.id).await?);
    assert!(matches!(
        service.get_by_id(category.id).await,
        Err(AppError::Domain(DomainError::CategoryNotFound))
    ));

    Ok(())
}

/// Tests deleting a sub-category that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_sub_category_as_not_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let sub_category = factory::create_sub_category(db, category.id).await?;

    let service = SubCategoryService::new(db);

    assert!(!service.delete(999).await?);
    assert!(service.delete(sub_category.id).await?);

    Ok(())
}
