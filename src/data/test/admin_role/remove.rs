use super::*;

/// Tests removing a role from the allow-list.
///
/// Expected: Ok(true) for an allowed role, Ok(false) afterwards
#[tokio::test]
async fn removes_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin_role(db, "1", "100").await?;

    let repo = AdminRoleRepository::new(db);

    assert!(repo.remove(1, 100).await?);
    assert!(!repo.remove(1, 100).await?);
    assert!(repo.list(1).await?.is_empty());

    Ok(())
}
