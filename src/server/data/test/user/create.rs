use super::*;

/// Tests creating a user from a pre-hashed record.
///
/// Verifies that the returned profile carries no password material while the stored
/// row keeps the hash verbatim.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user_and_stores_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(NewUserRecord {
            name: "alice".to_string(),
            description: "Hiker".to_string(),
            avatar: "a.png".to_string(),
            role: None,
            password_hash: "$2b$04$hash".to_string(),
        })
        .await?;

    assert_eq!(user.name, "alice");
    assert_eq!(user.role, None);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password_hash, "$2b$04$hash");

    Ok(())
}
