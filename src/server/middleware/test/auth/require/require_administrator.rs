use super::*;

/// Tests an administrator passes the administrator check.
///
/// Expected: Ok(User) with the Administrator role
#[tokio::test]
async fn grants_access_to_administrator() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id.clone()).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Administrator])
        .await?;

    assert_eq!(user.id, admin.id);
    assert!(user.is_administrator());

    Ok(())
}

/// Tests a regular user fails the administrator check.
///
/// Expected: Err(AuthError::AccessDenied) naming the user
#[tokio::test]
async fn denies_access_to_regular_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id.clone()).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Administrator])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, user.id);
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}
