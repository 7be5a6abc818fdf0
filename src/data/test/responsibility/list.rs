use super::*;

/// Tests listing order.
///
/// Verifies ordering by sort_order and then by name.
///
/// Expected: Ok with [Alpha(0), Beta(0), Zulu(-1) first]
#[tokio::test]
async fn orders_by_sort_order_then_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_responsibility_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, order) in [("Beta", 0), ("Zulu", -1), ("Alpha", 0)] {
        factory::responsibility::ResponsibilityFactory::new(db, "1")
            .name(name)
            .sort_order(order)
            .build()
            .await?;
    }
    factory::create_responsibility(db, "2").await?;

    let repo = ResponsibilityRepository::new(db);
    let names: Vec<String> = repo.list(1).await?.into_iter().map(|r| r.name).collect();

    assert_eq!(names, vec!["Zulu", "Alpha", "Beta"]);

    Ok(())
}
