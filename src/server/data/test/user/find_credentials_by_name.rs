use super::*;

/// Tests finding credentials for an existing name.
///
/// Expected: Ok(Some) with the stored hash
#[tokio::test]
async fn finds_credentials_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("carol")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_name("carol").await?.unwrap();

    assert_eq!(credentials.password_hash, "stored-hash");

    Ok(())
}

/// Tests that the oldest user wins when names collide.
///
/// Expected: Ok(Some) with the first user's hash
#[tokio::test]
async fn prefers_lowest_id_on_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("dup")
        .password_hash("first")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("dup")
        .password_hash("second")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_name("dup").await?.unwrap();

    assert_eq!(credentials.password_hash, "first");

    Ok(())
}

/// Tests looking up a name nobody has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.find_credentials_by_name("nobody").await?.is_none());

    Ok(())
}
