use super::*;

/// Tests deleting an application.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_application() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let application = factory::create_application(db, "1", "10", "20").await?;

    let repo = AdminApplicationRepository::new(db);

    assert!(repo.delete(&application.id).await?);
    assert!(!repo.delete(&application.id).await?);
    assert!(repo.find_by_id(&application.id).await?.is_none());

    Ok(())
}
