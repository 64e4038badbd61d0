use super::*;

/// Tests two simultaneous bookings for the same stay cannot both be stored.
///
/// The overlap check and the insert share one transaction, so the slower request
/// either sees the first booking or fails to commit.
///
/// Expected: at most one Ok, and exactly as many stored bookings as successes
#[tokio::test]
async fn stores_at_most_one_of_concurrent_overlapping_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .on_disk()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_country, hotel) = factory::helpers::create_hotel_with_dependencies(db).await?;

    let service = BookingService::new(db);
    let (first, second) = tokio::join!(
        service.create(create_params(
            hotel.id,
            &user.id,
            date(2025, 6, 1),
            date(2025, 6, 4),
            2,
        )),
        service.create(create_params(
            hotel.id,
            &user.id,
            date(2025, 6, 2),
            date(2025, 6, 5),
            2,
        )),
    );

    let successes = [first.is_ok(), second.is_ok()]
        .into_iter()
        .filter(|ok| *ok)
        .count() as u64;
    assert!(successes <= 1);

    let stored = service
        .get_user_bookings(
            hotel.id,
            &user.id,
            BookingFilter::default(),
            PageRequest::default(),
        )
        .await?;
    assert_eq!(stored.total_count, successes);

    Ok(())
}
