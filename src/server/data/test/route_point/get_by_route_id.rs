use super::*;

/// Tests that only the requested route's points are returned.
///
/// Expected: Ok with points of the first route only, in insertion order
#[tokio::test]
async fn returns_only_points_of_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, points, _) = factory::helpers::create_route_with_children(db, 3, 0).await?;
    let (_, _, _) = factory::helpers::create_route_with_children(db, 2, 0).await?;

    let repo = RoutePointRepository::new(db);
    let result = repo
        .get_by_route_id(route.id, ListParams::default())
        .await?;

    let ids: Vec<i32> = result.iter().map(|p| p.id).collect();
    let expected: Vec<i32> = points.iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests listing points of a route with no points.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_route_without_points() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::create_route(db).await?;

    let repo = RoutePointRepository::new(db);
    let result = repo
        .get_by_route_id(route.id, ListParams::default())
        .await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests the window over one route's points.
///
/// Expected: Ok with the last two of four points
#[tokio::test]
async fn applies_window_within_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, points, _) = factory::helpers::create_route_with_children(db, 4, 0).await?;

    let repo = RoutePointRepository::new(db);
    let result = repo
        .get_by_route_id(
            route.id,
            ListParams {
                offset: 2,
                limit: 10,
            },
        )
        .await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id, points[2].id);
    assert_eq!(result[1].id, points[3].id);

    Ok(())
}

/// Tests that the global listing includes points of every route.
///
/// Expected: Ok with all points ordered by id
#[tokio::test]
async fn global_listing_spans_routes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_route_with_children(db, 2, 0).await?;
    factory::helpers::create_route_with_children(db, 1, 0).await?;

    let repo = RoutePointRepository::new(db);
    let result = repo.get_paginated(ListParams::default()).await?;

    assert_eq!(result.len(), 3);
    assert!(result.windows(2).all(|w| w[0].id < w[1].id));

    Ok(())
}
