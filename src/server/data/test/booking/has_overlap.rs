use super::*;

/// Tests a stay sharing nights with an existing booking is detected.
///
/// Existing booking covers 2025-06-01 to 2025-06-04.
///
/// Expected: Ok(true) for partial and enclosing overlaps
#[tokio::test]
async fn detects_overlapping_stay() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, hotel, _booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);

    assert!(
        repo.has_overlap(hotel.id, date(2025, 6, 3), date(2025, 6, 6), &user.id, None)
            .await?
    );
    assert!(
        repo.has_overlap(hotel.id, date(2025, 5, 30), date(2025, 6, 10), &user.id, None)
            .await?
    );
    assert!(
        repo.has_overlap(hotel.id, date(2025, 6, 2), date(2025, 6, 3), &user.id, None)
            .await?
    );

    Ok(())
}

/// Tests stays that only touch on the boundary day do not overlap.
///
/// Check-out day of one stay may be the check-in day of another.
///
/// Expected: Ok(false) on both sides
#[tokio::test]
async fn touching_stays_do_not_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, hotel, _booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);

    assert!(
        !repo
            .has_overlap(hotel.id, date(2025, 6, 4), date(2025, 6, 7), &user.id, None)
            .await?
    );
    assert!(
        !repo
            .has_overlap(hotel.id, date(2025, 5, 28), date(2025, 6, 1), &user.id, None)
            .await?
    );

    Ok(())
}

/// Tests canceled bookings never block new stays.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_canceled_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_country, hotel) = factory::helpers::create_hotel_with_dependencies(db).await?;
    BookingFactory::new(db, hotel.id, &user.id)
        .status("Canceled")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let overlaps = repo
        .has_overlap(hotel.id, date(2025, 6, 1), date(2025, 6, 4), &user.id, None)
        .await?;

    assert!(!overlaps);

    Ok(())
}

/// Tests only the requesting user's bookings at the same hotel are considered.
///
/// Expected: Ok(false) for another user and for another hotel
#[tokio::test]
async fn scopes_to_user_and_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, country, hotel, _booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let other_user = factory::create_user(db).await?;
    let other_hotel = factory::create_hotel(db, country.id).await?;

    let repo = BookingRepository::new(db);

    assert!(
        !repo
            .has_overlap(hotel.id, date(2025, 6, 1), date(2025, 6, 4), &other_user.id, None)
            .await?
    );
    assert!(
        !repo
            .has_overlap(other_hotel.id, date(2025, 6, 1), date(2025, 6, 4), &user.id, None)
            .await?
    );

    Ok(())
}

/// Tests the excluded booking is skipped so a stay can be changed in place.
///
/// Expected: Ok(false) when excluding the only overlapping booking
#[tokio::test]
async fn skips_excluded_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, hotel, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let overlaps = repo
        .has_overlap(
            hotel.id,
            date(2025, 6, 2),
            date(2025, 6, 5),
            &user.id,
            Some(booking.id),
        )
        .await?;

    assert!(!overlaps);

    Ok(())
}
