use super::*;

/// Tests the configured user is promoted when no administrator exists.
///
/// Expected: Ok(Some(User)) with the Administrator role
#[tokio::test]
async fn promotes_configured_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let promoted = AuthService::new(db)
        .promote_initial_admin(Some(&user.email.to_uppercase()))
        .await?;

    let promoted = promoted.expect("user should be promoted");
    assert_eq!(promoted.id, user.id);
    assert_eq!(promoted.role, UserRole::Administrator);

    Ok(())
}

/// Tests nothing changes once an administrator exists.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_admin(db).await?;
    let user = factory::create_user(db).await?;

    let promoted = AuthService::new(db)
        .promote_initial_admin(Some(&user.email))
        .await?;

    assert!(promoted.is_none());

    Ok(())
}

/// Tests a missing setting or unregistered email is tolerated.
///
/// Expected: Ok(None) for both
#[tokio::test]
async fn tolerates_missing_admin_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);

    assert!(service.promote_initial_admin(None).await?.is_none());
    assert!(service
        .promote_initial_admin(Some("nobody@example.com"))
        .await?
        .is_none());

    Ok(())
}
