use super::*;

/// Tests a hotel admin passes the check for their hotel.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_hotel_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (admin, hotel) = factory::helpers::create_hotel_with_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id.clone()).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::HotelOrSystemAdmin(hotel.id)])
        .await?;

    assert_eq!(user.id, admin.id);

    Ok(())
}

/// Tests a system administrator passes without a hotel assignment.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_system_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_country, hotel) = factory::helpers::create_hotel_with_dependencies(db).await?;
    let admin = create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id.clone()).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::HotelOrSystemAdmin(hotel.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests an admin of another hotel is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_of_other_hotel() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (admin, _admin_hotel) = factory::helpers::create_hotel_with_admin(db).await?;
    let (_country, hotel) = factory::helpers::create_hotel_with_dependencies(db).await?;
    AuthSession::new(session).set_user_id(admin.id.clone()).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::HotelOrSystemAdmin(hotel.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
