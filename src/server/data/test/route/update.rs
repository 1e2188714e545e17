use super::*;

/// Tests a partial update that only changes the title.
///
/// Verifies that untouched fields, including the creator and creation timestamp, keep
/// their stored values.
///
/// Expected: Ok(Some) with only the title changed
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::route::RouteFactory::new(db)
        .title("Old")
        .description("Unchanged")
        .creator("bob")
        .build()
        .await?;

    let repo = RouteRepository::new(db);
    let updated = repo
        .update(UpdateRouteParams {
            id: route.id,
            title: Some("New".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, route.id);
    assert_eq!(updated.title, "New");
    assert_eq!(updated.description, "Unchanged");
    assert_eq!(updated.creator, "bob");
    assert_eq!(updated.created_at, route.created_at);
    assert_eq!(updated.is_private, route.is_private);

    Ok(())
}

/// Tests updating every mutable field at once.
///
/// Expected: Ok(Some) with all fields replaced
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::create_route(db).await?;

    let repo = RouteRepository::new(db);
    let updated = repo
        .update(UpdateRouteParams {
            id: route.id,
            title: Some("T".to_string()),
            region: Some("R".to_string()),
            description: Some("D".to_string()),
            is_private: Some(true),
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "T");
    assert_eq!(updated.region, Some("R".to_string()));
    assert_eq!(updated.description, "D");
    assert!(updated.is_private);

    let stored = entity::prelude::Route::find_by_id(route.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, "T");
    assert!(stored.is_private);

    Ok(())
}

/// Tests that an empty patch leaves the route unchanged.
///
/// Expected: Ok(Some) equal to the stored route
#[tokio::test]
async fn empty_patch_returns_stored_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::create_route(db).await?;

    let repo = RouteRepository::new(db);
    let updated = repo
        .update(UpdateRouteParams {
            id: route.id,
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, route.title);
    assert_eq!(updated.description, route.description);

    Ok(())
}

/// Tests updating a route that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RouteRepository::new(db);
    let result = repo
        .update(UpdateRouteParams {
            id: 999,
            title: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
