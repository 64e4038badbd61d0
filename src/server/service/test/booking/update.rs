use super::*;

/// Tests an update moves the stay and recomputes the price.
///
/// Expected: Ok(Booking) with new dates, 5 nights at 50.00 and an update timestamp
#[tokio::test]
async fn updates_stay_and_reprices() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let country = factory::create_country(db).await?;
    let hotel = HotelFactory::new(db, country.id)
        .per_night_rate(5_000)
        .build()
        .await?;
    let booking = factory::create_booking(db, hotel.id, &user.id).await?;

    let service = BookingService::new(db);
    let updated = service
        .update(update_params(
            hotel.id,
            booking.id,
            &user.id,
            date(2025, 6, 10),
            date(2025, 6, 15),
            3,
        ))
        .await?;

    assert_eq!(updated.check_in, date(2025, 6, 10));
    assert_eq!(updated.check_out, date(2025, 6, 15));
    assert_eq!(updated.guests, 3);
    assert_eq!(updated.total_price, Decimal::new(25_000, 2));
    assert_eq!(updated.status, BookingStatus::Pending);
    assert!(updated.updated_at_utc.is_some());

    Ok(())
}

/// Tests a booking may be shifted over its own current dates.
///
/// Expected: Ok(Booking)
#[tokio::test]
async fn ignores_own_dates_when_checking_overlap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, hotel, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);
    let updated = service
        .update(update_params(
            hotel.id,
            booking.id,
            &user.id,
            date(2025, 6, 2),
            date(2025, 6, 5),
            2,
        ))
        .await?;

    assert_eq!(updated.check_in, date(2025, 6, 2));

    Ok(())
}

/// Tests moving a booking onto another of the user's bookings is rejected.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_overlap_with_other_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, hotel, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    BookingFactory::new(db, hotel.id, &user.id)
        .dates(date(2025, 6, 10), date(2025, 6, 12))
        .build()
        .await?;

    let service = BookingService::new(db);
    let result = service
        .update(update_params(
            hotel.id,
            booking.id,
            &user.id,
            date(2025, 6, 9),
            date(2025, 6, 11),
            2,
        ))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a canceled booking is rejected before the payload is validated.
///
/// Expected: Err(AppError::Conflict) even with zero guests
#[tokio::test]
async fn rejects_canceled_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_country, hotel) = factory::helpers::create_hotel_with_dependencies(db).await?;
    let booking = BookingFactory::new(db, hotel.id, &user.id)
        .status("Canceled")
        .build()
        .await?;

    let service = BookingService::new(db);
    let result = service
        .update(update_params(
            hotel.id,
            booking.id,
            &user.id,
            date(2025, 7, 1),
            date(2025, 7, 3),
            0,
        ))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests another user's booking cannot be updated.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn hides_other_users_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _country, hotel, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let service = BookingService::new(db);
    let result = service
        .update(update_params(
            hotel.id,
            booking.id,
            &other.id,
            date(2025, 7, 1),
            date(2025, 7, 3),
            2,
        ))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests an invalid stay on an active booking is rejected.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_invalid_stay() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, hotel, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);
    let result = service
        .update(update_params(
            hotel.id,
            booking.id,
            &user.id,
            date(2025, 7, 3),
            date(2025, 7, 1),
            2,
        ))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
