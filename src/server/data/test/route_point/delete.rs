use super::*;

/// Tests deleting a single point.
///
/// Expected: Ok(Some) with prior state, sibling points untouched
#[tokio::test]
async fn deletes_point_and_returns_prior_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, points, _) = factory::helpers::create_route_with_children(db, 2, 0).await?;

    let repo = RoutePointRepository::new(db);
    let deleted = repo.delete(points[0].id).await?.unwrap();

    assert_eq!(deleted.id, points[0].id);
    assert_eq!(deleted.latitude, points[0].latitude);
    assert!(repo.find_by_id(points[0].id).await?.is_none());
    assert!(repo.find_by_id(points[1].id).await?.is_some());

    Ok(())
}

/// Tests deleting a point that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_point() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoutePointRepository::new(db);
    assert!(repo.delete(1).await?.is_none());

    Ok(())
}

/// Tests removing every point of one route.
///
/// Expected: Ok with count of removed rows, other routes' points kept
#[tokio::test]
async fn deletes_all_points_of_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, _, _) = factory::helpers::create_route_with_children(db, 3, 0).await?;
    let (other, other_points, _) = factory::helpers::create_route_with_children(db, 1, 0).await?;

    let repo = RoutePointRepository::new(db);
    let removed = repo.delete_by_route_id(route.id).await?;

    assert_eq!(removed, 3);
    assert!(repo
        .get_by_route_id(route.id, ListParams::default())
        .await?
        .is_empty());
    let remaining = repo
        .get_by_route_id(other.id, ListParams::default())
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other_points[0].id);

    // Verify nothing else was removed
    let all = entity::prelude::RoutePoint::find().all(db).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}
