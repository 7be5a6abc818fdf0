use super::*;

/// Tests deleting a grant.
///
/// Verifies that the row is removed and a second delete reports nothing was deleted.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_grant_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grant = factory::create_grant(db, "1", "10", "100").await?;
    factory::create_grant(db, "1", "11", "100").await?;

    let repo = PromotionGrantRepository::new(db);

    assert!(repo.delete(grant.id).await?);
    assert!(!repo.delete(grant.id).await?);

    let remaining = entity::prelude::PromotionGrant::find().count(db).await?;
    assert_eq!(remaining, 1);

    Ok(())
}
