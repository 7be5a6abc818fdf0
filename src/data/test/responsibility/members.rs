use super::*;

/// Tests adding and removing responsibles and roles.
///
/// Verifies that duplicates are reported rather than inserted twice.
///
/// Expected: Ok with the member and role lists reflecting each change
#[tokio::test]
async fn adds_and_removes_members_and_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_responsibility_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let resp = factory::create_responsibility(db, "1").await?;

    let repo = ResponsibilityRepository::new(db);
    assert!(repo.add_member(resp.id, 10).await?);
    assert!(!repo.add_member(resp.id, 10).await?);
    assert!(repo.add_member(resp.id, 11).await?);
    assert!(repo.add_role(resp.id, 100).await?);
    assert!(!repo.add_role(resp.id, 100).await?);

    let loaded = repo.find_by_id(resp.id).await?.unwrap();
    assert_eq!(loaded.responsibles, vec![10, 11]);
    assert_eq!(loaded.role_ids, vec![100]);

    assert!(repo.remove_member(resp.id, 10).await?);
    assert!(!repo.remove_member(resp.id, 10).await?);
    assert!(repo.remove_role(resp.id, 100).await?);

    let loaded = repo.find_by_id(resp.id).await?.unwrap();
    assert_eq!(loaded.responsibles, vec![11]);
    assert!(loaded.role_ids.is_empty());

    Ok(())
}
