use super::*;

/// Tests creating a suggestion.
///
/// Expected: Ok with a pending suggestion and no target responsibility
#[tokio::test]
async fn creates_pending_suggestion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_responsibility_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResponsibilityRequestRepository::new(db);
    let request = repo
        .create(NewResponsibilityRequest {
            guild_id: 1,
            kind: RequestKind::Suggest,
            responsibility_id: None,
            user_id: 10,
            suggested_name: Some("Art".to_string()),
            content: "Curate the art channel".to_string(),
        })
        .await?;

    assert_eq!(request.kind, RequestKind::Suggest);
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.suggested_name.as_deref(), Some("Art"));
    assert!(request.responsibility_id.is_none());
    assert_eq!(repo.get_pending(1).await?.len(), 1);

    Ok(())
}
