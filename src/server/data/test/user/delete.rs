use super::*;

/// Tests deleting an existing user and then deleting it again.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_user_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());
    assert!(!repo.delete(user.id).await?);

    Ok(())
}
