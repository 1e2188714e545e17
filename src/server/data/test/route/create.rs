use super::*;

fn params(title: &str) -> CreateRouteParams {
    CreateRouteParams {
        title: title.to_string(),
        region: Some("Alps".to_string()),
        description: "A long ridge walk".to_string(),
        creator: "alice".to_string(),
        is_private: false,
    }
}

/// Tests creating a route with every field populated.
///
/// Verifies that the repository stores the provided fields and assigns an id and a
/// creation timestamp.
///
/// Expected: Ok with route created
#[tokio::test]
async fn creates_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let before = chrono::Utc::now();
    let repo = RouteRepository::new(db);
    let route = repo.create(params("Ridge")).await?;

    assert!(route.id > 0);
    assert_eq!(route.title, "Ridge");
    assert_eq!(route.region, Some("Alps".to_string()));
    assert_eq!(route.creator, "alice");
    assert!(!route.is_private);
    assert!(route.created_at >= before - chrono::Duration::seconds(1));

    // Verify route exists in database
    let db_route = entity::prelude::Route::find_by_id(route.id).one(db).await?;
    assert!(db_route.is_some());
    assert_eq!(db_route.unwrap().title, "Ridge");

    Ok(())
}

/// Tests creating a route without a region.
///
/// Expected: Ok with region stored as NULL
#[tokio::test]
async fn creates_route_without_region() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RouteRepository::new(db);
    let route = repo
        .create(CreateRouteParams {
            region: None,
            ..params("No region")
        })
        .await?;

    assert_eq!(route.region, None);

    Ok(())
}

/// Tests that consecutive creates receive distinct, increasing ids.
///
/// Expected: Ok with second id greater than first
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RouteRepository::new(db);
    let first = repo.create(params("First")).await?;
    let second = repo.create(params("Second")).await?;

    assert!(second.id > first.id);

    Ok(())
}
