use super::*;

/// Tests replacing a photo URL.
///
/// Expected: Ok(Some) with new URL and same route
#[tokio::test]
async fn replaces_url() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::create_route(db).await?;
    let photo = factory::create_route_photo(db, route.id).await?;

    let repo = RoutePhotoRepository::new(db);
    let updated = repo
        .update(UpdateRoutePhotoParams {
            id: photo.id,
            url: Some("https://img.example.com/new.jpg".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.url, Some("https://img.example.com/new.jpg".to_string()));
    assert_eq!(updated.route_id, Some(route.id));

    Ok(())
}

/// Tests that an empty patch keeps the stored URL.
///
/// Expected: Ok(Some) with original URL
#[tokio::test]
async fn empty_patch_keeps_url() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::create_route(db).await?;
    let photo = factory::create_route_photo(db, route.id).await?;

    let repo = RoutePhotoRepository::new(db);
    let updated = repo
        .update(UpdateRoutePhotoParams {
            id: photo.id,
            url: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.url, photo.url);

    Ok(())
}

/// Tests updating a photo that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoutePhotoRepository::new(db);
    let result = repo
        .update(UpdateRoutePhotoParams {
            id: 3,
            url: Some("x".to_string()),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
