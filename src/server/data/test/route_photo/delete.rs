use super::*;

/// Tests deleting a single photo.
///
/// Expected: Ok(Some) with prior state and row removed
#[tokio::test]
async fn deletes_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::create_route(db).await?;
    let photo = factory::create_route_photo(db, route.id).await?;

    let repo = RoutePhotoRepository::new(db);
    let deleted = repo.delete(photo.id).await?.unwrap();

    assert_eq!(deleted.id, photo.id);
    assert!(repo.find_by_id(photo.id).await?.is_none());
    assert!(repo.delete(photo.id).await?.is_none());

    Ok(())
}

/// Tests removing every photo of one route.
///
/// Expected: Ok with count of removed rows
#[tokio::test]
async fn deletes_all_photos_of_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, _, _) = factory::helpers::create_route_with_children(db, 0, 2).await?;
    let (other, _, _) = factory::helpers::create_route_with_children(db, 0, 1).await?;

    let repo = RoutePhotoRepository::new(db);
    assert_eq!(repo.delete_by_route_id(route.id).await?, 2);
    assert_eq!(repo.delete_by_route_id(route.id).await?, 0);
    assert_eq!(
        repo.get_by_route_id(other.id, ListParams::default())
            .await?
            .len(),
        1
    );

    Ok(())
}
