use super::*;

/// Tests deleting an existing route.
///
/// Verifies that the repository returns the pre-deletion state and the row is gone
/// afterwards.
///
/// Expected: Ok(Some) and route no longer stored
#[tokio::test]
async fn deletes_route_and_returns_prior_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::route::RouteFactory::new(db)
        .title("Doomed")
        .build()
        .await?;

    let repo = RouteRepository::new(db);
    let deleted = repo.delete(route.id).await?.unwrap();

    assert_eq!(deleted.id, route.id);
    assert_eq!(deleted.title, "Doomed");
    assert!(!repo.exists(route.id).await?);

    Ok(())
}

/// Tests that deleting a route leaves its points in place.
///
/// The repository only removes the route row; children are the service's concern.
///
/// Expected: Ok with points still stored
#[tokio::test]
async fn leaves_children_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, points, _) = factory::helpers::create_route_with_children(db, 2, 0).await?;

    let repo = RouteRepository::new(db);
    repo.delete(route.id).await?;

    let stored = entity::prelude::RoutePoint::find_by_id(points[0].id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests deleting a route that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RouteRepository::new(db);
    let result = repo.delete(42).await?;

    assert!(result.is_none());

    Ok(())
}
