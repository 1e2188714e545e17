use super::*;

/// Tests creating a point attached to a route.
///
/// Expected: Ok with point stored and route_id set
#[tokio::test]
async fn creates_point_for_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::create_route(db).await?;

    let repo = RoutePointRepository::new(db);
    let point = repo
        .create(CreateRoutePointParams {
            route_id: route.id,
            latitude: 40.7128,
            longitude: -74.006,
        })
        .await?;

    assert_eq!(point.route_id, Some(route.id));
    assert_eq!(point.latitude, 40.7128);
    assert_eq!(point.longitude, -74.006);

    let stored = entity::prelude::RoutePoint::find_by_id(point.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.route_id, Some(route.id));
    assert_eq!(stored.latitude, 40.7128);

    Ok(())
}

/// Tests that coordinates survive storage without loss of precision.
///
/// Expected: Ok with exact values read back
#[tokio::test]
async fn preserves_coordinate_precision() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::create_route(db).await?;

    let repo = RoutePointRepository::new(db);
    let point = repo
        .create(CreateRoutePointParams {
            route_id: route.id,
            latitude: 45.832_622_123_456_78,
            longitude: 6.865_174_987_654_32,
        })
        .await?;

    let found = repo.find_by_id(point.id).await?.unwrap();
    assert_eq!(found.latitude, 45.832_622_123_456_78);
    assert_eq!(found.longitude, 6.865_174_987_654_32);

    Ok(())
}
