use super::*;

/// Tests creating a photo with a URL.
///
/// Expected: Ok with photo attached to the route
#[tokio::test]
async fn creates_photo_with_url() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::create_route(db).await?;

    let repo = RoutePhotoRepository::new(db);
    let photo = repo
        .create(CreateRoutePhotoParams {
            route_id: route.id,
            url: Some("https://img.example.com/summit.jpg".to_string()),
        })
        .await?;

    assert_eq!(photo.route_id, Some(route.id));
    assert_eq!(
        photo.url,
        Some("https://img.example.com/summit.jpg".to_string())
    );

    Ok(())
}

/// Tests creating a photo without a URL.
///
/// Expected: Ok with url stored as NULL
#[tokio::test]
async fn creates_photo_without_url() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::create_route(db).await?;

    let repo = RoutePhotoRepository::new(db);
    let photo = repo
        .create(CreateRoutePhotoParams {
            route_id: route.id,
            url: None,
        })
        .await?;

    let found = repo.find_by_id(photo.id).await?.unwrap();
    assert_eq!(found.url, None);

    Ok(())
}

/// Tests listing photos of a single route.
///
/// Expected: Ok with only that route's photos
#[tokio::test]
async fn lists_photos_of_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, _, photos) = factory::helpers::create_route_with_children(db, 0, 2).await?;
    factory::helpers::create_route_with_children(db, 0, 3).await?;

    let repo = RoutePhotoRepository::new(db);
    let result = repo
        .get_by_route_id(route.id, ListParams::default())
        .await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id, photos[0].id);
    assert_eq!(result[1].id, photos[1].id);

    let all = repo.get_paginated(ListParams::default()).await?;
    assert_eq!(all.len(), 5);

    Ok(())
}
