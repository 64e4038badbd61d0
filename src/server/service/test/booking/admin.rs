use super::*;

/// Tests a hotel admin confirms a pending booking.
///
/// Expected: Ok(Booking) with Confirmed status
#[tokio::test]
async fn confirms_pending_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, hotel, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let admin = factory::create_user(db).await?;
    factory::create_hotel_admin(db, &admin.id, hotel.id).await?;

    let service = BookingService::new(db);
    let confirmed = service
        .confirm_by_admin(hotel.id, booking.id, &admin.id)
        .await?;

    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    let again = service
        .confirm_by_admin(hotel.id, booking.id, &admin.id)
        .await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a canceled booking cannot be confirmed.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_confirming_canceled_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, hotel) = factory::helpers::create_hotel_with_admin(db).await?;
    let user = factory::create_user(db).await?;
    let booking = BookingFactory::new(db, hotel.id, &user.id)
        .status("Canceled")
        .build()
        .await?;

    let service = BookingService::new(db);
    let result = service
        .confirm_by_admin(hotel.id, booking.id, &admin.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a hotel admin cancels a booking once.
///
/// Expected: Ok(Booking) with Canceled status, then Err(AppError::Conflict)
#[tokio::test]
async fn cancels_booking_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, hotel) = factory::helpers::create_hotel_with_admin(db).await?;
    let user = factory::create_user(db).await?;
    let booking = factory::create_booking(db, hotel.id, &user.id).await?;

    let service = BookingService::new(db);
    let canceled = service
        .cancel_by_admin(hotel.id, booking.id, &admin.id)
        .await?;
    assert_eq!(canceled.status, BookingStatus::Canceled);

    let again = service
        .cancel_by_admin(hotel.id, booking.id, &admin.id)
        .await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests non-admins are forbidden before the booking is looked up.
///
/// Expected: Err(AppError::Forbidden) for an existing and a missing booking
#[tokio::test]
async fn forbids_non_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _country, hotel, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);

    let confirm = service
        .confirm_by_admin(hotel.id, booking.id, &owner.id)
        .await;
    assert!(matches!(confirm, Err(AppError::Forbidden(_))));

    let cancel = service.cancel_by_admin(hotel.id, 999, &owner.id).await;
    assert!(matches!(cancel, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests an admin of one hotel has no say over another hotel's bookings.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn forbids_admin_of_other_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, country, hotel, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let other_hotel = factory::create_hotel(db, country.id).await?;
    let admin = factory::create_user(db).await?;
    factory::create_hotel_admin(db, &admin.id, other_hotel.id).await?;

    let service = BookingService::new(db);
    let result = service
        .confirm_by_admin(hotel.id, booking.id, &admin.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests a booking is looked up within the admin's hotel only.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn scopes_lookup_to_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, _hotel, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let (admin, admin_hotel) = factory::helpers::create_hotel_with_admin(db).await?;

    let service = BookingService::new(db);
    let result = service
        .confirm_by_admin(admin_hotel.id, booking.id, &admin.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
