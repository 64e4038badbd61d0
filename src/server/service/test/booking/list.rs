use super::*;

/// Tests a user's listing only contains their own bookings.
///
/// Expected: Ok(Paged) with one booking and a total of 1
#[tokio::test]
async fn lists_only_own_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, hotel, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_booking(db, hotel.id, &other.id).await?;

    let service = BookingService::new(db);
    let page = service
        .get_user_bookings(
            hotel.id,
            &user.id,
            BookingFilter::default(),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(page.total_count, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, booking.id);

    Ok(())
}

/// Tests the hotel listing contains every user's bookings filtered by status.
///
/// Expected: Ok(Paged) with both bookings, then only the Confirmed one
#[tokio::test]
async fn lists_hotel_bookings_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, hotel, _booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    let confirmed = BookingFactory::new(db, hotel.id, &other.id)
        .status("Confirmed")
        .build()
        .await?;

    let service = BookingService::new(db);
    let all = service
        .get_hotel_bookings(hotel.id, BookingFilter::default(), PageRequest::default())
        .await?;
    assert_eq!(all.total_count, 2);

    let filtered = service
        .get_hotel_bookings(
            hotel.id,
            BookingFilter {
                status: Some(BookingStatus::Confirmed),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;
    assert_eq!(filtered.total_count, 1);
    assert_eq!(filtered.items[0].id, confirmed.id);

    Ok(())
}

/// Tests listing bookings of a missing hotel.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = BookingService::new(db);
    let result = service
        .get_user_bookings(999, &user.id, BookingFilter::default(), PageRequest::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
