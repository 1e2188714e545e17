use super::*;

/// Tests updating only the latitude of a point.
///
/// Expected: Ok(Some) with longitude and route_id unchanged
#[tokio::test]
async fn updates_latitude_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::create_route(db).await?;
    let point = factory::route_point::RoutePointFactory::new(db, route.id)
        .latitude(10.0)
        .longitude(20.0)
        .build()
        .await?;

    let repo = RoutePointRepository::new(db);
    let updated = repo
        .update(UpdateRoutePointParams {
            id: point.id,
            latitude: Some(-33.5),
            longitude: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.latitude, -33.5);
    assert_eq!(updated.longitude, 20.0);
    assert_eq!(updated.route_id, Some(route.id));

    Ok(())
}

/// Tests updating a point that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_point() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoutePointRepository::new(db);
    let result = repo
        .update(UpdateRoutePointParams {
            id: 7,
            latitude: Some(1.0),
            longitude: Some(1.0),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
