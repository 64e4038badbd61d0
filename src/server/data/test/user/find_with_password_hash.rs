use super::*;

/// Tests the stored hash is returned alongside the user.
///
/// Expected: Ok(Some((user, hash))), Ok(None) for unknown email
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .email("hash@example.com")
        .password_hash("$argon2id$stub")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_with_password_hash("hash@example.com").await?;
    assert!(found.is_some());
    let (found_user, hash) = found.unwrap();
    assert_eq!(found_user.id, user.id);
    assert_eq!(hash, "$argon2id$stub");

    assert!(repo
        .find_with_password_hash("missing@example.com")
        .await?
        .is_none());

    Ok(())
}
