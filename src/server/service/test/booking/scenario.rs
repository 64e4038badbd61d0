use super::*;

/// Tests a full booking lifecycle at one hotel.
///
/// A user books, fails to double book, has the booking confirmed by the hotel admin,
/// cancels it and can then book the same dates again.
///
/// Expected: Ok(()) with every step behaving as described
#[tokio::test]
async fn books_confirms_cancels_and_rebooks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;
    let hotel = HotelFactory::new(db, country.id)
        .per_night_rate(5_000)
        .build()
        .await?;
    let user = factory::create_user(db).await?;
    let admin = factory::create_user(db).await?;
    factory::create_hotel_admin(db, &admin.id, hotel.id).await?;

    let service = BookingService::new(db);

    let booking = service
        .create(create_params(
            hotel.id,
            &user.id,
            date(2025, 1, 10),
            date(2025, 1, 12),
            2,
        ))
        .await?;
    assert_eq!(booking.total_price, Decimal::new(10_000, 2));
    assert_eq!(booking.status, BookingStatus::Pending);

    let overlapping = service
        .create(create_params(
            hotel.id,
            &user.id,
            date(2025, 1, 11),
            date(2025, 1, 13),
            2,
        ))
        .await;
    assert!(matches!(overlapping, Err(AppError::Conflict(_))));

    let confirmed = service
        .confirm_by_admin(hotel.id, booking.id, &admin.id)
        .await?;
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    let canceled = service.cancel(hotel.id, booking.id, &user.id).await?;
    assert_eq!(canceled.status, BookingStatus::Canceled);

    let rebooked = service
        .create(create_params(
            hotel.id,
            &user.id,
            date(2025, 1, 11),
            date(2025, 1, 13),
            2,
        ))
        .await?;
    assert_eq!(rebooked.status, BookingStatus::Pending);
    assert_ne!(rebooked.id, booking.id);

    Ok(())
}
