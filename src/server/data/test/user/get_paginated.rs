use super::*;

/// Tests listing users in id order with a limit.
///
/// Expected: Ok with the first two users
#[tokio::test]
async fn lists_users_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo
        .get_paginated(ListParams {
            offset: 0,
            limit: 2,
        })
        .await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, first.id);
    assert_eq!(users[1].id, second.id);

    Ok(())
}
