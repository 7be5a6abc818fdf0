use super::*;

/// Tests deleting a responsibility with members and roles.
///
/// Verifies that child rows are removed along with the responsibility.
///
/// Expected: Ok(true) with no rows left in any table
#[tokio::test]
async fn deletes_with_children() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_responsibility_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let resp = factory::create_responsibility(db, "1").await?;
    factory::create_responsibility_member(db, resp.id, "10").await?;
    factory::create_responsibility_role(db, resp.id, "100").await?;

    let repo = ResponsibilityRepository::new(db);

    assert!(repo.delete(resp.id).await?);
    assert!(!repo.delete(resp.id).await?);
    assert_eq!(entity::prelude::Responsibility::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ResponsibilityMember::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ResponsibilityRole::find().count(db).await?, 0);

    Ok(())
}
