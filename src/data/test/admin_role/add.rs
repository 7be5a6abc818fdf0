use super::*;

/// Tests adding roles to the allow-list.
///
/// Verifies that adding an existing role is reported and not duplicated.
///
/// Expected: Ok(true) then Ok(false), list holds each role once
#[tokio::test]
async fn adds_role_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRoleRepository::new(db);

    assert!(repo.add(1, 100).await?);
    assert!(!repo.add(1, 100).await?);
    assert!(repo.add(1, 101).await?);

    assert_eq!(repo.list(1).await?, vec![100, 101]);
    assert!(repo.contains(1, 100).await?);
    assert!(!repo.contains(2, 100).await?);

    Ok(())
}
